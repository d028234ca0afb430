//! The token scanner.
//!
//! `Scanner` owns a [`SourceBuffer`] and a byte position. Each
//! [`next_token`](Scanner::next_token) call resumes a [`RawScanner`] at the
//! saved position, scans exactly one raw token, cooks it into a [`Token`],
//! and stores the new position. The position only moves forward.

use monkey_lexer_core::{RawScanner, SourceBuffer};
use tracing::trace;

use crate::convert::cook;
use crate::Token;

/// Single-pass scanner over one source string.
///
/// Not synchronized: `next_token` takes `&mut self`. Lex on several threads
/// by giving each thread its own `Scanner`.
#[derive(Clone, Debug)]
pub struct Scanner {
    buf: SourceBuffer,
    /// Byte offset of the next unread byte.
    pos: u32,
    /// Set once `EndOfInput` has been returned; makes the iterator fused.
    done: bool,
}

impl Scanner {
    /// Create a scanner over a copy of `source`.
    pub fn new(source: &str) -> Self {
        Self::from_buffer(SourceBuffer::new(source))
    }

    /// Create a scanner over an existing buffer.
    pub fn from_buffer(buf: SourceBuffer) -> Self {
        Self {
            buf,
            pos: 0,
            done: false,
        }
    }

    /// Produce the next token.
    ///
    /// Never fails: unrecognized characters become `Illegal` tokens. Once the
    /// input is exhausted every call returns `EndOfInput` with empty text.
    pub fn next_token(&mut self) -> Token {
        let mut raw = RawScanner::new(self.buf.cursor_at(self.pos));
        let tok = raw.next_token();
        let text = raw.text(tok);
        let kind = cook(tok.tag, text);

        debug_assert!(raw.pos() >= self.pos, "scanner position moved backwards");
        self.pos = raw.pos();

        let token = Token::new(kind, text);
        if token.is_eof() {
            self.done = true;
        }
        trace!(kind = %token.kind, text = %token.text, pos = self.pos, "token");
        token
    }

    /// Byte offset of the next unread byte.
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// The source being scanned.
    pub fn source(&self) -> &SourceBuffer {
        &self.buf
    }
}

/// Yields every token before `EndOfInput`, then `None` forever.
impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Scanner {}
