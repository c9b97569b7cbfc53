#![no_main]

use arbitrary::Arbitrary;
use boundstr::{
    TerminatedStr, bounded_append, bounded_copy, bounded_format,
    guard::{GUARD_LEN, Guarded},
    reserve_terminator, terminated_len,
};
use libfuzzer_sys::fuzz_target;

const STORAGE: usize = 256;

#[derive(Debug, Arbitrary)]
enum Op {
    Copy(Vec<u8>),
    Append(Vec<u8>),
    Format(u32, String),
    /// Overwrite one byte of the window, possibly removing the terminator.
    Poke(u8, u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    fill: u8,
    ops: Vec<Op>,
}

fn check(buf: &Guarded<STORAGE>, needed: usize, stored_before: usize, src_len: usize, op: &Op) {
    assert!(buf.guards_intact(), "guard overwritten by {op:?}");

    let capacity = buf.capacity();
    let window = buf.window();
    if capacity == 0 {
        return;
    }

    let view = TerminatedStr::new(window);
    assert!(view.is_terminated(), "window left unterminated by {op:?}");
    assert!(view.len() <= reserve_terminator(capacity));

    // Formatted pieces may carry zero bytes of their own.
    if needed < capacity && !matches!(op, Op::Format(..)) {
        assert_eq!(view.len(), needed, "content does not match untruncated length");
    }
    if matches!(op, Op::Append(_)) {
        assert_eq!(needed, stored_before + src_len);
    }
}

fn run(input: Input) {
    let capacity = usize::from(input.capacity).min(STORAGE - 2 * GUARD_LEN);
    let mut buf = Guarded::<STORAGE>::new(capacity, input.fill);

    for op in &input.ops {
        let stored_before = terminated_len(buf.window());
        let (needed, src_len) = match op {
            Op::Copy(src) => (bounded_copy(buf.window_mut(), src), terminated_len(src)),
            Op::Append(src) => (bounded_append(buf.window_mut(), src), terminated_len(src)),
            Op::Format(n, s) => {
                let needed = bounded_format(buf.window_mut(), format_args!("{n}:{s}"));
                (needed, needed)
            }
            Op::Poke(at, byte) => {
                let window = buf.window_mut();
                if !window.is_empty() {
                    let at = usize::from(*at) % window.len();
                    window[at] = *byte;
                }
                continue;
            }
        };
        check(&buf, needed, stored_before, src_len, op);
    }
}

fuzz_target!(|input: Input| run(input));
