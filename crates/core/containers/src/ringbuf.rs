//! Fixed-capacity circular buffer.
//!
//! This module provides [`RingBuffer`], a first-in-first-out queue whose
//! storage is an inline array of exactly `N` slots. It never allocates, which
//! makes it usable in latency-sensitive paths and in code that runs without
//! an allocator.
//!
//! # Indexing
//!
//! The buffer tracks three counters:
//!
//! - `head`: slot of the oldest unread element
//! - `tail`: slot the next write goes to
//! - `count`: number of live elements, `0 <= count <= N`
//!
//! Both indices advance as `next(i) = (i + 1) % N`. Because `count` is stored
//! separately, every one of the `N` slots is usable; `head == tail` alone does
//! not distinguish empty from full.
//!
//! # Overflow policy
//!
//! [`RingBuffer::write`] rejects a value when the buffer is full and returns
//! [`ContainerError::Overflow`]. Overwriting the oldest element is available,
//! but only through the separately named [`RingBuffer::force_write`].
//!
//! # Examples
//!
//! ```
//! use containers::{ContainerError, RingBuffer};
//!
//! let mut buf = RingBuffer::<i32, 3>::new();
//! buf.write(1)?;
//! buf.write(2)?;
//! buf.write(3)?;
//! assert!(buf.is_full());
//! assert_eq!(buf.write(4), Err(ContainerError::Overflow));
//!
//! assert_eq!(buf.read(), Ok(1));
//! buf.write(4)?;
//! assert_eq!(buf.read(), Ok(2));
//! assert_eq!(buf.read(), Ok(3));
//! assert_eq!(buf.read(), Ok(4));
//! assert_eq!(buf.read(), Err(ContainerError::Underflow));
//! # Ok::<(), ContainerError>(())
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::mem::MaybeUninit;

use crate::error::ContainerError;

/// A fixed-capacity FIFO ring buffer.
///
/// # Type Parameters
///
/// - `T`: The type of elements stored
/// - `N`: The capacity. Must be at least 1; `RingBuffer::<T, 0>::new()` fails
///   to compile.
///
/// # Examples
///
/// ```
/// use containers::RingBuffer;
///
/// let mut buf = RingBuffer::<u8, 1>::new();
/// buf.write(42).unwrap();
/// assert!(buf.is_full());
/// assert_eq!(buf.read(), Ok(42));
/// assert!(buf.is_empty());
/// ```
pub struct RingBuffer<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    head: usize,
    tail: usize,
    count: usize,
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// The number of elements the buffer can hold.
    pub const CAPACITY: usize = N;

    /// Creates an empty ring buffer.
    ///
    /// This method does not allocate memory.
    ///
    /// # Example
    /// ```
    /// use containers::RingBuffer;
    ///
    /// let buf = RingBuffer::<u8, 8>::new();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 8);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N > 0, "RingBuffer capacity must be at least 1") };
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Returns true if the buffer holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the buffer holds `N` elements.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count == N
    }

    /// Returns the number of elements currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns the maximum number of elements, which is always `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Writes (or enqueues) `value` at the back of the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Overflow`] if the buffer is full. The buffer
    /// is unchanged and `value` is dropped; use [`RingBuffer::try_write`] to
    /// get it back.
    pub fn write(&mut self, value: T) -> Result<(), ContainerError> {
        self.try_write(value)
            .map_err(|_| ContainerError::Overflow.rejected("RingBuffer::write"))
    }

    /// Writes (or enqueues) `value`, handing it back if the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns `Err(value)` if the buffer is full.
    ///
    /// # Example
    /// ```
    /// use containers::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<String, 1>::new();
    /// assert!(buf.try_write("first".into()).is_ok());
    /// assert_eq!(buf.try_write("second".into()), Err("second".to_string()));
    /// ```
    pub fn try_write(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.store(value);
        Ok(())
    }

    /// Writes `value`, evicting and returning the oldest element if the
    /// buffer is full.
    ///
    /// This is the explicit overwrite-on-full variant of [`RingBuffer::write`].
    ///
    /// # Example
    /// ```
    /// use containers::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<u8, 2>::new();
    /// assert_eq!(buf.force_write(1), None);
    /// assert_eq!(buf.force_write(2), None);
    /// assert_eq!(buf.force_write(3), Some(1));
    /// assert_eq!(buf.read(), Ok(2));
    /// ```
    pub fn force_write(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            trace!("RingBuffer::force_write: overwriting oldest of {} slots", N);
            Some(self.take_oldest())
        } else {
            None
        };
        self.store(value);
        evicted
    }

    /// Reads (or dequeues) the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Underflow`] if the buffer is empty.
    pub fn read(&mut self) -> Result<T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Underflow.rejected("RingBuffer::read"));
        }
        Ok(self.take_oldest())
    }

    /// Returns a reference to the oldest element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Underflow`] if the buffer is empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Underflow.rejected("RingBuffer::peek"));
        }
        // SAFETY: count > 0, so the slot at `head` holds a live element.
        Ok(unsafe { self.buf[self.head].assume_init_ref() })
    }

    /// Removes all elements, dropping them.
    pub fn clear(&mut self) {
        while !self.is_empty() {
            drop(self.take_oldest());
        }
        self.head = 0;
        self.tail = 0;
    }

    /// Iterates from the oldest element to the newest.
    ///
    /// # Example
    /// ```
    /// use containers::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<u8, 4>::new();
    /// for i in 1..=3 {
    ///     buf.write(i).unwrap();
    /// }
    /// assert!(buf.iter().copied().eq([1, 2, 3]));
    /// ```
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            buf: self,
            offset: 0,
            remaining: self.count,
        }
    }

    /// Stores `value` at `tail`. The caller guarantees the buffer is not full.
    fn store(&mut self, value: T) {
        debug_assert!(!self.is_full());
        self.buf[self.tail].write(value);
        self.tail = (self.tail + 1) % N;
        self.count += 1;
    }

    /// Moves the element at `head` out. The caller guarantees the buffer is
    /// not empty.
    fn take_oldest(&mut self) -> T {
        debug_assert!(!self.is_empty());
        // SAFETY: count > 0, so `head` points at an element written by
        // `store` and not yet read. Advancing `head` below marks the slot as
        // uninitialized again, so it is never read twice.
        let value = unsafe { self.buf[self.head].assume_init_read() };
        self.head = (self.head + 1) % N;
        self.count -= 1;
        value
    }
}

impl<T, const N: usize> Drop for RingBuffer<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, const N: usize> Clone for RingBuffer<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for value in self {
            out.store(value.clone());
        }
        out
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`RingBuffer`], oldest element first.
///
/// Created by [`RingBuffer::iter`].
pub struct Iter<'a, T, const N: usize> {
    buf: &'a RingBuffer<T, N>,
    offset: usize,
    remaining: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = (self.buf.head + self.offset) % N;
        self.offset += 1;
        self.remaining -= 1;
        // SAFETY: `offset` was below the buffer's count, so `idx` lies in the
        // live region that starts at `head`.
        Some(unsafe { self.buf.buf[idx].assume_init_ref() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}
