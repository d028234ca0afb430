//! Low-level byte scanner for Monkey.
//!
//! This crate is the raw layer of the lexer. It knows how to walk a
//! sentinel-terminated byte buffer and split it into `(RawTag, start, len)`
//! triples. It does not resolve keywords or allocate token text; that is the
//! job of `monkey_lexer`.
//!
//! ```text
//! &str ──► SourceBuffer ──► Cursor ──► RawScanner ──► RawToken
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
