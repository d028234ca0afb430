//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end of input by reading the sentinel instead of
//! comparing against the length on every byte. The total size is rounded up
//! to the next 64-byte boundary, which also makes [`Cursor::peek`] safe at
//! the last source byte.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, sentinel-terminated copy of the source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to `u32::MAX`
    /// bytes; the scanner treats everything past that as end of input.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        let content_len = source_len as usize;

        // Minimum: source + 1 sentinel byte, rounded up to a cache line.
        let padded_len = (content_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..content_len].copy_from_slice(&source_bytes[..content_len]);

        Self { buf, source_len }
    }

    /// Source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Full buffer including the sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        self.cursor_at(0)
    }

    /// Create a [`Cursor`] positioned at `pos`.
    ///
    /// Positions past the source length are clamped to the sentinel, so a
    /// cursor created here can never read beyond the buffer.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, pos.min(self.source_len))
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
