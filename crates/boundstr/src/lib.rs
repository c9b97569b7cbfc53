//! Truncating copy and append for zero-terminated byte buffers.
//!
//! The two primitives, [`bounded_copy`] and [`bounded_append`], write into a
//! caller-owned `&mut [u8]` whose length is the buffer's *capacity*. They
//! never write past that capacity, always leave the buffer terminated by a
//! zero byte when the capacity is non-zero, and return the length the
//! operation *would* have needed. Truncation is therefore never an error: a
//! caller detects it by comparing the returned length against the capacity.
//!
//! ```rust
//! use boundstr::{bounded_append, bounded_copy};
//!
//! let mut buf = [0u8; 16];
//! assert_eq!(bounded_copy(&mut buf, "1234567890"), 10);
//! assert_eq!(bounded_append(&mut buf, "ABCDE"), 15); // exact fit
//! assert_eq!(bounded_append(&mut buf, "QRSTUV"), 21); // 21 >= 16: truncated
//! assert_eq!(&buf, b"1234567890ABCDE\0");
//! ```
//!
//! Layered on top of the primitives are a `core::fmt` sink with `snprintf`
//! semantics ([`BoundedWriter`], [`bounded_format!`]), typed truncation
//! reports ([`Outcome`], [`TruncationError`]) and a diagnostic byte dump
//! ([`dump_bytes`], [`report`]).

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod append;
mod copy;
mod dump;
mod error;
mod format;
mod outcome;
mod size;
mod terminated;

#[cfg(any(test, feature = "fuzzing"))]
pub mod guard;

#[cfg(test)]
mod tests;

pub use append::{append_outcome, bounded_append, try_append};
pub use copy::{bounded_copy, copy_outcome, try_copy};
pub use dump::{BufferReport, ByteDump, dump_bytes, report};
pub use error::TruncationError;
pub use format::{BoundedWriter, bounded_format};
pub use outcome::Outcome;
pub use size::{min_size, reserve_terminator};
pub use terminated::{TerminatedStr, terminated_len};

/// Render format arguments into a terminated buffer with `snprintf`
/// semantics, returning the full rendered length.
///
/// ```rust
/// let mut buf = [b'#'; 16];
/// let needed = boundstr::bounded_format!(&mut buf, "id={} tag={}", 42, "near-limit");
/// assert_eq!(needed, 20);
/// assert_eq!(&buf, b"id=42 tag=near-\0");
/// ```
#[macro_export]
macro_rules! bounded_format {
    ( $dst:expr, $( $arg:tt )* ) => {
        $crate::bounded_format($dst, ::core::format_args!($( $arg )*))
    };
}
