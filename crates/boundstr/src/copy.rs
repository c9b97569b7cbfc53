use crate::{
    error::TruncationError,
    outcome::Outcome,
    size::{min_size, reserve_terminator},
    terminated::terminated_len,
};

/// Copy the terminated string `src` into `dst`, truncating to fit.
///
/// The capacity is `dst.len()`. At most `capacity - 1` content bytes are
/// copied and a zero byte always follows them when the capacity is non-zero;
/// an empty `dst` is never written, which makes `bounded_copy(&mut [], src)`
/// a pure measurement.
///
/// `src` ends at its first zero byte, or at the end of the slice if it holds
/// none. Nothing after that point is read.
///
/// Returns the length of `src`, whether or not it fit. The copy was truncated
/// iff the return value is `>= dst.len()`.
///
/// ```rust
/// use boundstr::bounded_copy;
///
/// let mut buf = [0u8; 16];
/// assert_eq!(bounded_copy(&mut buf, "ABCDEFGHIJKLMNOP"), 16);
/// assert_eq!(&buf, b"ABCDEFGHIJKLMNO\0");
///
/// assert_eq!(bounded_copy(&mut [], "measure me"), 10);
/// ```
pub fn bounded_copy<S>(dst: &mut [u8], src: &S) -> usize
where
    S: AsRef<[u8]> + ?Sized,
{
    let src = src.as_ref();
    let capacity = dst.len();
    let room = reserve_terminator(capacity);
    let src_len = terminated_len(src);
    let copy_len = min_size(room, src_len);

    if copy_len > 0 {
        dst[..copy_len].copy_from_slice(&src[..copy_len]);
    }
    if capacity > 0 {
        dst[copy_len] = 0;
    }

    #[cfg(feature = "tracing")]
    if src_len >= capacity {
        tracing::trace!(needed = src_len, capacity, "bounded copy truncated");
    }

    src_len
}

/// [`bounded_copy`], reporting the result as an [`Outcome`].
pub fn copy_outcome<S>(dst: &mut [u8], src: &S) -> Outcome
where
    S: AsRef<[u8]> + ?Sized,
{
    let capacity = dst.len();
    Outcome::new(bounded_copy(dst, src), capacity)
}

/// [`bounded_copy`], treating truncation as an error.
///
/// # Errors
///
/// Returns [`TruncationError`] when `src` did not fit. `dst` still holds the
/// truncated, terminated prefix.
pub fn try_copy<S>(dst: &mut [u8], src: &S) -> Result<usize, TruncationError>
where
    S: AsRef<[u8]> + ?Sized,
{
    copy_outcome(dst, src).into_result()
}
