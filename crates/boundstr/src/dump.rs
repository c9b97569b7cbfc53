//! Diagnostic rendering of raw buffers.
//!
//! Nothing here allocates; both renderers are [`Display`](fmt::Display)
//! adapters over a borrowed buffer.

use core::fmt::{self, Write};

use crate::terminated::TerminatedStr;

/// Every byte of a buffer, one glyph per byte.
///
/// Printable ASCII renders as itself, a zero byte as `\0` and anything else
/// as `.`. Bytes after the terminator are shown too, which is the point:
/// the dump proves where the terminator sits and that nothing spilled.
///
/// ```rust
/// let buf = *b"ab\0\xFFc";
/// assert_eq!(boundstr::dump_bytes(&buf).to_string(), "ab\\0.c");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByteDump<'a>(&'a [u8]);

/// Dump every byte of `buf`. See [`ByteDump`].
#[must_use]
pub fn dump_bytes(buf: &[u8]) -> ByteDump<'_> {
    ByteDump(buf)
}

impl fmt::Display for ByteDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            match b {
                0 => f.write_str("\\0")?,
                32..=126 => f.write_char(b as char)?,
                _ => f.write_char('.')?,
            }
        }
        Ok(())
    }
}

/// A labelled two-line report: the terminated content, then the byte dump.
///
/// ```rust
/// let buf = *b"hi\0#";
/// assert_eq!(
///     boundstr::report("greeting", &buf).to_string(),
///     "greeting (bufsz=4): \"hi\"\n  bytes: hi\\0#",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BufferReport<'a> {
    label: &'a str,
    buf: &'a [u8],
}

/// Report on `buf` under `label`. See [`BufferReport`].
#[must_use]
pub fn report<'a>(label: &'a str, buf: &'a [u8]) -> BufferReport<'a> {
    BufferReport { label, buf }
}

impl fmt::Display for BufferReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = TerminatedStr::new(self.buf);
        write!(
            f,
            "{} (bufsz={}): \"{}\"\n  bytes: {}",
            self.label,
            self.buf.len(),
            content,
            dump_bytes(self.buf)
        )
    }
}
