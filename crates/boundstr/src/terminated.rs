use core::{ffi::CStr, fmt};

use bstr::{BStr, ByteSlice};

/// Length of the zero-terminated string at the start of `bytes`: the index
/// of the first zero byte, or `bytes.len()` when the slice holds none.
///
/// The scan never looks past the end of the slice, so an unterminated buffer
/// measures as full rather than being read out of bounds.
///
/// ```rust
/// use boundstr::terminated_len;
///
/// assert_eq!(terminated_len(b"abc\0def"), 3);
/// assert_eq!(terminated_len(b"abc"), 3);
/// assert_eq!(terminated_len(b"\0"), 0);
/// ```
#[inline]
#[must_use]
pub fn terminated_len(bytes: &[u8]) -> usize {
    bytes.find_byte(0).unwrap_or(bytes.len())
}

/// Borrowed, read-only view of a zero-terminated string.
///
/// The view holds the content before the terminator; the terminator itself
/// and anything after it are not part of the view.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TerminatedStr<'a> {
    content: &'a [u8],
    terminated: bool,
}

impl<'a> TerminatedStr<'a> {
    /// View the terminated string at the start of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        let len = terminated_len(bytes);
        Self {
            content: &bytes[..len],
            terminated: len < bytes.len(),
        }
    }

    /// Content bytes, excluding the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.content
    }

    /// Number of content bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the view holds no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether a zero byte was found inside the viewed slice.
    ///
    /// `false` means the content ran to the end of the slice, which for a
    /// destination buffer means it is not a valid terminated string.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// The content as a [`BStr`], for display with lossy escaping.
    #[must_use]
    pub fn as_bstr(&self) -> &'a BStr {
        self.content.as_bstr()
    }
}

impl AsRef<[u8]> for TerminatedStr<'_> {
    fn as_ref(&self) -> &[u8] {
        self.content
    }
}

impl<'a> From<&'a CStr> for TerminatedStr<'a> {
    fn from(value: &'a CStr) -> Self {
        Self {
            content: value.to_bytes(),
            terminated: true,
        }
    }
}

impl PartialEq<[u8]> for TerminatedStr<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.content == other
    }
}

impl PartialEq<&[u8]> for TerminatedStr<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.content == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for TerminatedStr<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.content == other.as_slice()
    }
}

impl PartialEq<&str> for TerminatedStr<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.content == other.as_bytes()
    }
}

impl fmt::Display for TerminatedStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl fmt::Debug for TerminatedStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}
