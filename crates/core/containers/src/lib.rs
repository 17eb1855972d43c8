//! Small generic containers with explicit failure modes.
//!
//! This crate provides three independent, leaf-level types:
//!
//! - [`Stack`] - a growable LIFO stack backed by a `Vec`
//! - [`RingBuffer`] - a fixed-capacity FIFO circular buffer with no heap allocation
//! - [`Outcome`] - a two-variant tagged union holding either a success value or an error
//!
//! Every operation that can violate a precondition (popping an empty stack,
//! writing into a full ring buffer, reading the wrong payload of an outcome)
//! returns a [`ContainerError`] instead of panicking, and leaves the container
//! exactly as it was before the call.
//!
//! # Examples
//!
//! ## Using `Stack`
//!
//! ```
//! use containers::{ContainerError, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.top(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(ContainerError::Underflow));
//! ```
//!
//! ## Using `RingBuffer`
//!
//! ```
//! use containers::{ContainerError, RingBuffer};
//!
//! // All N slots are usable.
//! let mut buf = RingBuffer::<u8, 2>::new();
//!
//! buf.write(1)?;
//! buf.write(2)?;
//! assert!(buf.is_full());
//! assert_eq!(buf.write(3), Err(ContainerError::Overflow));
//!
//! assert_eq!(buf.read(), Ok(1));
//! # Ok::<(), ContainerError>(())
//! ```
//!
//! ## Using `Outcome`
//!
//! ```
//! use containers::{ContainerError, Outcome};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32> {
//!     if b == 0 {
//!         return Outcome::err("division by zero".into());
//!     }
//!     Outcome::ok(a / b)
//! }
//!
//! assert_eq!(divide(6, 3).value(), Ok(&2));
//! assert_eq!(divide(1, 0).value(), Err(ContainerError::WrongVariantAccess));
//! ```
//!
//! # Features
//!
//! - `std` (default): Enables the std-only unit tests and `log/std`
//! - `serde`: `Serialize`/`Deserialize` for [`Stack`], [`Outcome`] and
//!   [`ContainerError`]
//! - `log`: Emits `trace` records when an operation is rejected or a
//!   ring buffer slot is overwritten
//!
//! # Thread safety
//!
//! None of the types synchronize internally. Share them behind a lock, or
//! keep them confined to a single owner.

#![no_std]

extern crate alloc;

/// Forwards to `log::trace!` under the `containers` target when the `log`
/// feature is enabled, and expands to nothing otherwise.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "containers", $($arg)+);
    };
}

pub mod error;
pub mod outcome;
pub mod ringbuf;
pub mod stack;

pub use error::ContainerError;
pub use outcome::Outcome;
pub use ringbuf::RingBuffer;
pub use stack::Stack;
