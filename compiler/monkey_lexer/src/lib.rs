//! Lexer for the Monkey language.
//!
//! Turns source text into a stream of [`Token`]s. The byte-level work
//! (whitespace, runs, one byte of lookahead) happens in
//! `monkey_lexer_core`; this crate cooks raw tokens into owned tokens,
//! resolves keywords and offers batch helpers.
//!
//! ```
//! use monkey_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! assert_eq!(scanner.next_token().text, "five");
//! ```

mod convert;
mod keywords;
mod lex_error;
mod scanner;
mod token;

pub use keywords::lookup_ident;
pub use lex_error::LexError;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

use std::sync::Once;
use tracing::debug;

/// Output of [`lex`]: the full token list and one error per illegal token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Every token, ending with `EndOfInput`.
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Tokens if the input had no illegal characters, otherwise the first
    /// error.
    pub fn into_result(self) -> Result<Vec<Token>, LexError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

/// Lex `source` to completion, collecting illegal characters as errors.
pub fn lex(source: &str) -> LexOutput {
    let tokens = tokenize(source);
    let errors: Vec<LexError> = tokens
        .iter()
        .enumerate()
        .filter(|(_, tok)| tok.is_illegal())
        .map(|(index, tok)| {
            debug!(index, text = %tok.text, "illegal character");
            LexError::illegal(index, tok.text.clone())
        })
        .collect();
    debug!(tokens = tokens.len(), errors = errors.len(), "lexed source");
    LexOutput { tokens, errors }
}

/// Lex `source` to completion. The last token is always `EndOfInput`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let is_eof = token.is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=monkey_lexer=debug` or `RUST_LOG=monkey_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host program.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
