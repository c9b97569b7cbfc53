use core::fmt;

use crate::{
    outcome::Outcome,
    size::{min_size, reserve_terminator},
};

/// A [`fmt::Write`] sink over a fixed buffer that truncates instead of
/// failing.
///
/// The buffer starts out empty (a terminator at index 0) and stays
/// terminated after every write. Writes that do not fit are cut short and
/// still succeed; [`needed`](Self::needed) keeps counting the full length so
/// truncation can be detected afterwards. Bytes are copied as given, so a
/// zero byte inside a formatted piece ends the visible string early.
///
/// ```rust
/// use core::fmt::Write;
/// use boundstr::BoundedWriter;
///
/// let mut buf = [0u8; 8];
/// let mut w = BoundedWriter::new(&mut buf);
/// write!(w, "{}-{}", 1234, 5678).unwrap();
/// assert_eq!(w.as_bytes(), b"1234-56");
/// assert_eq!(w.needed(), 9);
/// assert!(w.outcome().is_truncated());
/// ```
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    needed: usize,
}

impl<'a> BoundedWriter<'a> {
    /// Start writing at the beginning of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        Self {
            buf,
            len: 0,
            needed: 0,
        }
    }

    /// Capacity of the underlying buffer, including the terminator slot.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Content bytes actually stored so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.len
    }

    /// Content bytes that every write so far would have needed.
    #[must_use]
    pub fn needed(&self) -> usize {
        self.needed
    }

    /// Visible content, excluding the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The needed length measured against the capacity.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::new(self.needed, self.capacity())
    }

    /// Append raw bytes, truncating to fit.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let room = reserve_terminator(self.buf.len()) - self.len;
        let take = min_size(room, bytes.len());

        if take > 0 {
            self.buf[self.len..self.len + take].copy_from_slice(&bytes[..take]);
            self.len += take;
        }
        if let Some(slot) = self.buf.get_mut(self.len) {
            *slot = 0;
        }
        self.needed += bytes.len();
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_bytes(s.as_bytes());
        Ok(())
    }
}

/// Render `args` into `dst` with `snprintf` semantics.
///
/// Any previous content of `dst` is discarded. Returns the full rendered
/// length; the output was truncated iff that is `>= dst.len()`. An empty
/// `dst` is never written, so this also measures.
///
/// A `Display` impl that reports an error stops rendering; whatever was
/// rendered up to that point stays in the buffer and is counted.
///
/// See also [`bounded_format!`](crate::bounded_format!).
pub fn bounded_format(dst: &mut [u8], args: fmt::Arguments<'_>) -> usize {
    let mut writer = BoundedWriter::new(dst);
    let rendered = fmt::write(&mut writer, args);

    #[cfg(feature = "tracing")]
    {
        if rendered.is_err() {
            tracing::debug!(
                rendered = writer.needed(),
                "formatting stopped by a failing Display impl"
            );
        }
        if writer.outcome().is_truncated() {
            tracing::trace!(
                needed = writer.needed(),
                capacity = writer.capacity(),
                "bounded format truncated"
            );
        }
    }
    #[cfg(not(feature = "tracing"))]
    let _ = rendered;

    writer.needed()
}
