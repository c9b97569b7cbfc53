/// The smaller of two sizes.
///
/// ```rust
/// assert_eq!(boundstr::min_size(3, 7), 3);
/// assert_eq!(boundstr::min_size(0, 0), 0);
/// ```
#[inline]
#[must_use]
pub const fn min_size(a: usize, b: usize) -> usize {
    if a < b { a } else { b }
}

/// Bytes available for content in a buffer of `capacity` bytes once one byte
/// is set aside for the terminator. Floors at zero, so capacities 0 and 1
/// both leave no room.
///
/// ```rust
/// assert_eq!(boundstr::reserve_terminator(16), 15);
/// assert_eq!(boundstr::reserve_terminator(1), 0);
/// assert_eq!(boundstr::reserve_terminator(0), 0);
/// ```
#[inline]
#[must_use]
pub const fn reserve_terminator(capacity: usize) -> usize {
    capacity.saturating_sub(1)
}
