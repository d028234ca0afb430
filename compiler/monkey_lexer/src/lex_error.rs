//! Lexer diagnostics.
//!
//! The scanner itself never fails; it emits `Illegal` tokens. [`lex`]
//! collects one `LexError` per illegal token so a caller that treats
//! illegal input as fatal can propagate it with `?`.
//!
//! [`lex`]: crate::lex

use thiserror::Error;

/// An illegal character in the token stream.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("illegal character {text:?} at token {index}")]
pub struct LexError {
    /// Index of the `Illegal` token in the token list.
    pub index: usize,
    /// The offending character.
    pub text: String,
}

impl LexError {
    pub fn illegal(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}
