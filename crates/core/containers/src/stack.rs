//! Growable LIFO stack.
//!
//! [`Stack`] wraps a `Vec` and exposes only the top of the sequence. Pushing
//! never fails (short of running out of memory); popping or peeking an empty
//! stack returns [`ContainerError::Underflow`] and leaves the stack untouched.
//!
//! # Examples
//!
//! ```
//! use containers::Stack;
//!
//! let mut stack: Stack<&str> = ["a", "b"].into_iter().collect();
//! stack.push("c");
//!
//! assert_eq!(stack.len(), 3);
//! assert_eq!(stack.pop(), Ok("c"));
//! assert_eq!(stack.top(), Ok(&"b"));
//! ```

use alloc::vec::Vec;

use crate::error::ContainerError;

/// A last-in-first-out stack backed by a `Vec`.
///
/// The top of the stack is always the most recently pushed element that has
/// not been popped yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty stack with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `value` onto the top of the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(7);
    /// assert_eq!(stack.len(), 1);
    /// assert_eq!(stack.top(), Ok(&7));
    /// ```
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Underflow`] if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{ContainerError, Stack};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(ContainerError::Underflow));
    /// ```
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.data
            .pop()
            .ok_or_else(|| ContainerError::Underflow.rejected("Stack::pop"))
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Underflow`] if the stack is empty.
    pub fn top(&self) -> Result<&T, ContainerError> {
        self.data
            .last()
            .ok_or_else(|| ContainerError::Underflow.rejected("Stack::top"))
    }

    /// Returns a mutable reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Underflow`] if the stack is empty.
    pub fn top_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.data
            .last_mut()
            .ok_or_else(|| ContainerError::Underflow.rejected("Stack::top_mut"))
    }

    /// Returns true if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Removes all elements, dropping them.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the stack, returning its elements bottom first.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The last element of the vector becomes the top of the stack.
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
