//! Raw token tags produced by the scanner.
//!
//! A `RawTag` says what kind of bytes a raw token covers. Keywords are not
//! distinguished here: `let` and `five` are both `Ident`, and the cooking
//! layer in `monkey_lexer` tells them apart.

/// Kind of a raw token.
///
/// One byte wide. Discriminants are grouped into semantic ranges so a tag
/// can be classified with a range check:
///
/// | Range   | Group                 |
/// |---------|-----------------------|
/// | 0-15    | identifiers, literals |
/// | 32-63   | operators             |
/// | 80-95   | delimiters            |
/// | 240-254 | errors                |
/// | 255     | end of input          |
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// Maximal run of ASCII letters and underscores.
    Ident = 0,
    /// Maximal run of decimal digits.
    Int = 1,

    // === Operators ===
    /// `=`
    Equal = 32,
    /// `==`
    EqualEqual = 33,
    /// `!`
    Bang = 34,
    /// `!=`
    BangEqual = 35,
    /// `+`
    Plus = 36,
    /// `-`
    Minus = 37,
    /// `*`
    Star = 38,
    /// `/`
    Slash = 39,
    /// `<`
    Less = 40,
    /// `>`
    Greater = 41,

    // === Delimiters ===
    /// `(`
    LeftParen = 80,
    /// `)`
    RightParen = 81,
    /// `{`
    LeftBrace = 82,
    /// `}`
    RightBrace = 83,
    /// `,`
    Comma = 84,
    /// `;`
    Semicolon = 85,

    // === Errors ===
    /// A character that starts no token. Covers a whole UTF-8 character
    /// when the leading byte is non-ASCII.
    InvalidByte = 240,
    /// A NUL byte inside the source content.
    InteriorNull = 241,

    // === Control ===
    /// End of input. Always zero-length.
    Eof = 255,
}

impl RawTag {
    /// Fixed source text for tags that always cover the same bytes.
    ///
    /// Returns `None` for tags whose text varies (`Ident`, `Int`), for
    /// errors, and for `Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Equal => Some("="),
            Self::EqualEqual => Some("=="),
            Self::Bang => Some("!"),
            Self::BangEqual => Some("!="),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Less => Some("<"),
            Self::Greater => Some(">"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::Ident | Self::Int | Self::InvalidByte | Self::InteriorNull | Self::Eof => None,
        }
    }

    /// Human-readable description, for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer literal",
            Self::Equal => "`=`",
            Self::EqualEqual => "`==`",
            Self::Bang => "`!`",
            Self::BangEqual => "`!=`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Less => "`<`",
            Self::Greater => "`>`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::Comma => "`,`",
            Self::Semicolon => "`;`",
            Self::InvalidByte => "invalid byte",
            Self::InteriorNull => "interior null byte",
            Self::Eof => "end of input",
        }
    }

    /// Returns `true` for tags that mark unrecognized input.
    #[inline]
    pub const fn is_error(self) -> bool {
        self as u8 >= 240 && self as u8 != 255
    }
}

/// A raw token: a tag plus the byte range it covers.
///
/// `Copy`, 12 bytes, no heap allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    /// Byte offset of the first byte of the token.
    pub start: u32,
    /// Length in bytes. Zero only for `Eof`.
    pub len: u32,
}

impl RawToken {
    /// Byte offset one past the last byte of the token.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }
}
