//! Buffers fenced by sentinel bytes, for proving that a bounded write stays
//! inside its capacity.
//!
//! Only compiled for tests and for the `fuzzing` feature.

/// Sentinel written into the guard regions.
pub const GUARD_BYTE: u8 = 0xA5;

/// Bytes of guard on each side of the usable region.
pub const GUARD_LEN: usize = 8;

/// Fixed-size backing store with a usable window of `capacity` bytes in the
/// middle and [`GUARD_LEN`] sentinel bytes on each side. `N` must be at
/// least `2 * GUARD_LEN`.
#[derive(Debug, Clone)]
pub struct Guarded<const N: usize> {
    storage: [u8; N],
    capacity: usize,
}

impl<const N: usize> Guarded<N> {
    /// Fence a window of `capacity` bytes pre-filled with `fill`.
    ///
    /// `capacity` is clamped to what fits in `N` alongside both guards.
    #[must_use]
    pub fn new(capacity: usize, fill: u8) -> Self {
        let capacity = capacity.min(N.saturating_sub(2 * GUARD_LEN));
        let mut storage = [GUARD_BYTE; N];
        storage[GUARD_LEN..GUARD_LEN + capacity].fill(fill);
        Self { storage, capacity }
    }

    /// Usable capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The usable window.
    #[must_use]
    pub fn window(&self) -> &[u8] {
        &self.storage[GUARD_LEN..GUARD_LEN + self.capacity]
    }

    /// The usable window, for handing to a bounded write.
    pub fn window_mut(&mut self) -> &mut [u8] {
        &mut self.storage[GUARD_LEN..GUARD_LEN + self.capacity]
    }

    /// Whether every byte outside the window still holds [`GUARD_BYTE`].
    #[must_use]
    pub fn guards_intact(&self) -> bool {
        let (front, rest) = self.storage.split_at(GUARD_LEN);
        let back = &rest[self.capacity..];
        front.iter().chain(back).all(|&b| b == GUARD_BYTE)
    }
}
