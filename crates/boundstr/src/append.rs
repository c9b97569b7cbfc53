use crate::{
    error::TruncationError, outcome::Outcome, size::min_size, terminated::terminated_len,
};

/// Append the terminated string `src` to the terminated string already in
/// `dst`, truncating to fit.
///
/// The capacity is `dst.len()`. The existing content is measured up to its
/// first zero byte; the scan stops at the capacity, so a buffer with no
/// terminator measures as full. A full buffer gets its last byte re-stamped
/// as a terminator and nothing is copied. Earlier bytes are left as they
/// are.
///
/// Otherwise as much of `src` as fits is copied after the existing content,
/// followed by a zero byte. An empty `dst` is never written.
///
/// Returns the length the concatenation would need, whether or not it fit.
/// The append was truncated iff the return value is `>= dst.len()`.
///
/// ```rust
/// use boundstr::{bounded_append, bounded_copy};
///
/// let mut buf = [0u8; 8];
/// bounded_copy(&mut buf, "abc");
/// assert_eq!(bounded_append(&mut buf, "defgh"), 8);
/// assert_eq!(&buf, b"abcdefg\0");
/// ```
pub fn bounded_append<S>(dst: &mut [u8], src: &S) -> usize
where
    S: AsRef<[u8]> + ?Sized,
{
    let src = src.as_ref();
    let capacity = dst.len();
    let used = terminated_len(dst);

    if used >= capacity {
        if let Some(last) = dst.last_mut() {
            *last = 0;
        }
        let needed = used + terminated_len(src);

        #[cfg(feature = "tracing")]
        tracing::trace!(needed, capacity, "bounded append into full buffer");

        return needed;
    }

    let room = capacity - used - 1;
    let src_len = terminated_len(src);
    let copy_len = min_size(room, src_len);

    if copy_len > 0 {
        dst[used..used + copy_len].copy_from_slice(&src[..copy_len]);
    }
    dst[used + copy_len] = 0;

    let needed = used + src_len;

    #[cfg(feature = "tracing")]
    if needed >= capacity {
        tracing::trace!(needed, capacity, "bounded append truncated");
    }

    needed
}

/// [`bounded_append`], reporting the result as an [`Outcome`].
pub fn append_outcome<S>(dst: &mut [u8], src: &S) -> Outcome
where
    S: AsRef<[u8]> + ?Sized,
{
    let capacity = dst.len();
    Outcome::new(bounded_append(dst, src), capacity)
}

/// [`bounded_append`], treating truncation as an error.
///
/// # Errors
///
/// Returns [`TruncationError`] when the concatenation did not fit. `dst`
/// still holds the truncated, terminated result.
pub fn try_append<S>(dst: &mut [u8], src: &S) -> Result<usize, TruncationError>
where
    S: AsRef<[u8]> + ?Sized,
{
    append_outcome(dst, src).into_result()
}
