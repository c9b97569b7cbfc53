use crate::{error::TruncationError, size::min_size, size::reserve_terminator};

/// What a bounded write needed, measured against where it went.
///
/// ```rust
/// use boundstr::copy_outcome;
///
/// let mut buf = [0u8; 16];
/// let outcome = copy_outcome(&mut buf, "ABCDEFGHIJKLMNOP");
/// assert!(outcome.is_truncated());
/// assert_eq!(outcome.written(), 15);
/// assert_eq!(outcome.dropped(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Length the full result would have needed, excluding the terminator.
    pub needed: usize,
    /// Capacity of the destination, including the terminator slot.
    pub capacity: usize,
}

impl Outcome {
    /// Pair a needed length with the capacity it was written into.
    #[must_use]
    pub const fn new(needed: usize, capacity: usize) -> Self {
        Self { needed, capacity }
    }

    /// Whether the full result did not fit.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.needed >= self.capacity
    }

    /// Content bytes left visible in the destination.
    #[must_use]
    pub const fn written(&self) -> usize {
        min_size(self.needed, reserve_terminator(self.capacity))
    }

    /// Content bytes that did not make it into the destination.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.needed - self.written()
    }

    /// `Ok(needed)` when everything fit, otherwise the truncation as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TruncationError`] when `needed >= capacity`.
    pub const fn into_result(self) -> Result<usize, TruncationError> {
        if self.is_truncated() {
            Err(TruncationError {
                needed: self.needed,
                capacity: self.capacity,
            })
        } else {
            Ok(self.needed)
        }
    }
}

impl From<TruncationError> for Outcome {
    fn from(value: TruncationError) -> Self {
        Self::new(value.needed, value.capacity)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::exact_fit(15, 16, false, 15, 0)]
    #[case::one_over(16, 16, true, 15, 1)]
    #[case::heavy(127, 16, true, 15, 112)]
    #[case::zero_capacity(5, 0, true, 0, 5)]
    #[case::one_byte_empty(0, 1, false, 0, 0)]
    #[case::one_byte_content(1, 1, true, 0, 1)]
    fn outcome_accounting(
        #[case] needed: usize,
        #[case] capacity: usize,
        #[case] truncated: bool,
        #[case] written: usize,
        #[case] dropped: usize,
    ) {
        let outcome = Outcome::new(needed, capacity);
        assert_eq!(outcome.is_truncated(), truncated);
        assert_eq!(outcome.written(), written);
        assert_eq!(outcome.dropped(), dropped);
        assert_eq!(outcome.into_result().is_err(), truncated);
    }

    #[test]
    fn zero_capacity_empty_source_counts_as_truncated() {
        // Nothing at all can be stored, not even the terminator.
        assert!(Outcome::new(0, 0).is_truncated());
    }

    #[test]
    fn error_message_names_both_sizes() {
        let err = Outcome::new(21, 16).into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "truncated: needed 21 bytes of content but capacity is 16"
        );
        assert_eq!(Outcome::from(err), Outcome::new(21, 16));
    }
}
