//! Raw tag to token kind conversion.

use monkey_lexer_core::RawTag;

use crate::{keywords, TokenKind};

/// Cook a raw tag into a `TokenKind`. `text` is only consulted for
/// identifiers, which may turn out to be keywords.
pub(crate) fn cook(tag: RawTag, text: &str) -> TokenKind {
    match tag {
        RawTag::Ident => keywords::lookup_ident(text),
        RawTag::Int => TokenKind::Integer,

        RawTag::Equal => TokenKind::Assign,
        RawTag::EqualEqual => TokenKind::Equal,
        RawTag::Bang => TokenKind::Bang,
        RawTag::BangEqual => TokenKind::NotEqual,
        RawTag::Plus => TokenKind::Plus,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Star => TokenKind::Asterisk,
        RawTag::Slash => TokenKind::Slash,
        RawTag::Less => TokenKind::LessThan,
        RawTag::Greater => TokenKind::GreaterThan,

        RawTag::LeftParen => TokenKind::LeftParen,
        RawTag::RightParen => TokenKind::RightParen,
        RawTag::LeftBrace => TokenKind::LeftBrace,
        RawTag::RightBrace => TokenKind::RightBrace,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Semicolon => TokenKind::Semicolon,

        RawTag::InvalidByte | RawTag::InteriorNull => TokenKind::Illegal,
        RawTag::Eof => TokenKind::EndOfInput,
    }
}
