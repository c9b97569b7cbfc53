use alloc::{format, string::String, vec::Vec};

use quickcheck::QuickCheck;

use super::quickcheck_tests;
use crate::{bounded_format, guard::Guarded, reserve_terminator};

/// Property: formatting into a bounded buffer yields a prefix of what the
/// unbounded formatter renders, and reports the unbounded length.
#[test]
fn format_matches_unbounded_prefix_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(capacity: u8, number: i64, words: Vec<String>) -> bool {
        let mut buf = Guarded::<64>::new(usize::from(capacity % 41), b'#');
        let capacity = buf.capacity();

        let rendered = format!("{number}:{}", words.join(","));
        let needed = bounded_format(
            buf.window_mut(),
            format_args!("{number}:{}", words.join(",")),
        );

        if needed != rendered.len() || !buf.guards_intact() {
            return false;
        }
        if capacity == 0 {
            return true;
        }

        let stored = rendered.len().min(reserve_terminator(capacity));
        let window = buf.window();
        window[..stored] == rendered.as_bytes()[..stored] && window[stored] == 0
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(u8, i64, Vec<String>) -> bool);
}
