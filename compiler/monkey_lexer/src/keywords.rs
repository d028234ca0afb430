//! Reserved word table.
//!
//! The table is a `match` compiled into the binary: immutable, shared by
//! every scanner, nothing to initialize. Lookup uses the identifier's length
//! as a first-pass filter (keywords are 2-6 bytes), then compares against
//! the keywords of that length only. Matching is exact and case-sensitive.

use crate::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for anything that is not exactly one of `fn`, `let`,
/// `true`, `false`, `if`, `else`, `return`.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "fn" => Some(TokenKind::Function),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

/// Resolve an identifier run: its keyword kind, or `Identifier`.
#[inline]
pub fn lookup_ident(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Identifier)
}
