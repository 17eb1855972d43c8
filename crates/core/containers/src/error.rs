//! Error type shared by every container in this crate.

use thiserror::Error;

const UNDERFLOW: &str = "buffer underflow: container is empty";
const OVERFLOW: &str = "buffer overflow: container is full";
const WRONG_VARIANT_ACCESS: &str =
    "wrong variant access: outcome does not hold the requested payload";

/// A precondition violation reported by a container operation.
///
/// Each kind carries a fixed message, so callers match on the variant rather
/// than on the rendered text. The container that produced the error is left
/// unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerError {
    /// Removing or peeking an element from an empty [`Stack`](crate::Stack)
    /// or [`RingBuffer`](crate::RingBuffer).
    #[error("{}", UNDERFLOW)]
    Underflow,
    /// Writing into a [`RingBuffer`](crate::RingBuffer) that is at capacity.
    #[error("{}", OVERFLOW)]
    Overflow,
    /// Reading the value of an error [`Outcome`](crate::Outcome), or the error
    /// of a successful one.
    #[error("{}", WRONG_VARIANT_ACCESS)]
    WrongVariantAccess,
}

impl ContainerError {
    /// Returns the fixed message for this kind. Matches the `Display` output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Underflow => UNDERFLOW,
            Self::Overflow => OVERFLOW,
            Self::WrongVariantAccess => WRONG_VARIANT_ACCESS,
        }
    }

    /// Records the rejected operation and hands the error back.
    #[inline]
    pub(crate) fn rejected(self, op: &'static str) -> Self {
        trace!("{}: {}", op, self);
        #[cfg(not(feature = "log"))]
        let _ = op;
        self
    }
}
