use thiserror::Error;

/// The content did not fit in the destination buffer.
///
/// Returned by [`try_copy`](crate::try_copy), [`try_append`](crate::try_append)
/// and [`Outcome::into_result`](crate::Outcome::into_result) for callers that
/// treat truncation as a failure. The buffer has already been written, and
/// holds the truncated, terminated prefix.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("truncated: needed {needed} bytes of content but capacity is {capacity}")]
pub struct TruncationError {
    /// Length the full result would have needed, excluding the terminator.
    pub needed: usize,
    /// Capacity of the destination, including the terminator slot.
    pub capacity: usize,
}
