//! Hand-written raw scanner producing `RawToken` values.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords; that is deferred to the cooking layer.
//!
//! # Design
//!
//! Each call skips leading whitespace once, then dispatches on the current
//! byte. Every arm calls a focused method that advances the cursor past the
//! token and returns it. The sentinel byte (`0x00`) dispatches to `eof()`,
//! which never advances.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner over a [`Cursor`].
///
/// Produces one token at a time. Unrecognized input is encoded as
/// `RawTag::InvalidByte`, not as an error.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner starting at the cursor's position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof` without moving.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'+' => self.single(start, RawTag::Plus),
            b'-' => self.single(start, RawTag::Minus),
            b'*' => self.single(start, RawTag::Star),
            b'/' => self.single(start, RawTag::Slash),
            b'<' => self.single(start, RawTag::Less),
            b'>' => self.single(start, RawTag::Greater),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            0x80..=0xFF => self.invalid_char(start),
            _ => self.single(start, RawTag::InvalidByte),
        }
    }

    /// Current byte offset. Never decreases.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Source text covered by `tok`.
    pub fn text(&self, tok: RawToken) -> &'a str {
        self.cursor.slice(tok.start, tok.end())
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                start,
                len: 0,
            }
        } else {
            self.single(start, RawTag::InteriorNull)
        }
    }

    // ─── Identifiers & Integers ────────────────────────────────────

    /// Letters and underscores only. A digit ends the run, so `foo123`
    /// scans as `Ident` then `Int`.
    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_ident_byte);
        RawToken {
            tag: RawTag::Ident,
            start,
            len: self.cursor.pos() - start,
        }
    }

    /// Decimal digits only: no sign, point, exponent or separators.
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        RawToken {
            tag: RawTag::Int,
            start,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            start,
            len: self.cursor.pos() - start,
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.cursor.advance(); // consume first '='
            self.single(start, RawTag::EqualEqual)
        } else {
            self.single(start, RawTag::Equal)
        }
    }

    fn bang(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.cursor.advance(); // consume '!'
            self.single(start, RawTag::BangEqual)
        } else {
            self.single(start, RawTag::Bang)
        }
    }

    // ─── Errors ────────────────────────────────────────────────────

    /// Non-ASCII leading byte: consume the whole UTF-8 character so the
    /// token text stays valid UTF-8.
    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        RawToken {
            tag: RawTag::InvalidByte,
            start,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier bytes.
/// `true` for a-z, A-Z and underscore. Digits end an identifier.
/// The sentinel byte (0x00) maps to `false`, terminating `eat_while`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'_');
        i += 1;
    }
    table
};

/// Returns `true` if `b` can appear in an identifier.
#[inline]
fn is_ident_byte(b: u8) -> bool {
    IS_IDENT_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`. For streaming access,
/// construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
mod tests;
