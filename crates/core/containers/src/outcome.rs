//! Two-variant success/error container.
//!
//! [`Outcome`] holds exactly one of a success value or an error value. The
//! variant is chosen by the named constructor and never changes afterwards:
//! there is no empty state, no `Default` impl, and no accessor that swaps one
//! payload for the other.
//!
//! Asking for the payload that is not there returns
//! [`ContainerError::WrongVariantAccess`] rather than panicking.

use alloc::string::String;

use crate::error::ContainerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Repr<T, E> {
    Ok(T),
    Err(E),
}

/// Either a success value of type `T` or an error of type `E`.
///
/// `E` defaults to [`String`].
///
/// # Examples
///
/// ```
/// use containers::{ContainerError, Outcome};
///
/// let ok: Outcome<u32> = Outcome::ok(3);
/// assert!(ok.is_ok());
/// assert_eq!(ok.value(), Ok(&3));
/// assert_eq!(ok.error(), Err(ContainerError::WrongVariantAccess));
///
/// let err: Outcome<u32, &str> = Outcome::err("bad input");
/// assert!(err.is_err());
/// assert_eq!(err.error(), Ok(&"bad input"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[must_use]
pub struct Outcome<T, E = String>(Repr<T, E>);

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome holding `value`.
    pub const fn ok(value: T) -> Self {
        Self(Repr::Ok(value))
    }

    /// Creates a failed outcome holding `error`.
    pub const fn err(error: E) -> Self {
        Self(Repr::Err(error))
    }

    /// Returns true if this outcome holds a success value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.0, Repr::Ok(_))
    }

    /// Returns true if this outcome holds an error.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns a reference to the success value.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::WrongVariantAccess`] if this outcome is an
    /// error.
    pub fn value(&self) -> Result<&T, ContainerError> {
        match &self.0 {
            Repr::Ok(value) => Ok(value),
            Repr::Err(_) => {
                Err(ContainerError::WrongVariantAccess.rejected("Outcome::value"))
            }
        }
    }

    /// Returns a reference to the error value.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::WrongVariantAccess`] if this outcome is a
    /// success.
    pub fn error(&self) -> Result<&E, ContainerError> {
        match &self.0 {
            Repr::Err(error) => Ok(error),
            Repr::Ok(_) => {
                Err(ContainerError::WrongVariantAccess.rejected("Outcome::error"))
            }
        }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::WrongVariantAccess`] if this outcome is an
    /// error. The error payload is dropped.
    pub fn into_value(self) -> Result<T, ContainerError> {
        match self.0 {
            Repr::Ok(value) => Ok(value),
            Repr::Err(_) => {
                Err(ContainerError::WrongVariantAccess.rejected("Outcome::into_value"))
            }
        }
    }

    /// Consumes the outcome, returning the error value.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::WrongVariantAccess`] if this outcome is a
    /// success. The success payload is dropped.
    pub fn into_error(self) -> Result<E, ContainerError> {
        match self.0 {
            Repr::Err(error) => Ok(error),
            Repr::Ok(_) => {
                Err(ContainerError::WrongVariantAccess.rejected("Outcome::into_error"))
            }
        }
    }

    /// Borrows both payload types, keeping the variant.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match &self.0 {
            Repr::Ok(value) => Outcome::ok(value),
            Repr::Err(error) => Outcome::err(error),
        }
    }

    /// Maps the success value with `f`, leaving an error untouched.
    ///
    /// # Example
    /// ```
    /// use containers::Outcome;
    ///
    /// let doubled = Outcome::<i32, ()>::ok(21).map(|v| v * 2);
    /// assert_eq!(doubled.value(), Ok(&42));
    /// ```
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self.0 {
            Repr::Ok(value) => Outcome::ok(f(value)),
            Repr::Err(error) => Outcome::err(error),
        }
    }

    /// Maps the error value with `f`, leaving a success untouched.
    pub fn map_err<G, F: FnOnce(E) -> G>(self, f: F) -> Outcome<T, G> {
        match self.0 {
            Repr::Ok(value) => Outcome::ok(value),
            Repr::Err(error) => Outcome::err(f(error)),
        }
    }

    /// Converts into a standard [`Result`], for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if this outcome holds an error.
    pub fn into_result(self) -> Result<T, E> {
        match self.0 {
            Repr::Ok(value) => Ok(value),
            Repr::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    extern crate std;
    use std::string::{String, ToString};
    use std::vec;
    use std::vec::Vec;

    use super::*;

    fn divide(a: i32, b: i32) -> Outcome<i32> {
        if b == 0 {
            return Outcome::err("division by zero".to_string());
        }
        Outcome::ok(a / b)
    }

    #[test]
    fn ok_is_exclusive() {
        let outcome: Outcome<i32> = Outcome::ok(5);
        assert!(outcome.is_ok());
        assert!(!outcome.is_err());
        assert_eq!(outcome.value(), Ok(&5));
    }

    #[test]
    fn err_is_exclusive() {
        let outcome: Outcome<i32> = Outcome::err("boom".to_string());
        assert!(outcome.is_err());
        assert!(!outcome.is_ok());
        assert_eq!(outcome.error().map(String::as_str), Ok("boom"));
    }

    #[test]
    fn value_on_err_is_wrong_variant() {
        let outcome = divide(1, 0);
        assert_eq!(outcome.value(), Err(ContainerError::WrongVariantAccess));
        // still an error afterwards
        assert!(outcome.is_err());
    }

    #[test]
    fn error_on_ok_is_wrong_variant() {
        let outcome = divide(6, 3);
        assert_eq!(outcome.error(), Err(ContainerError::WrongVariantAccess));
        assert_eq!(outcome.value(), Ok(&2));
    }

    #[test]
    fn into_value_and_into_error() {
        assert_eq!(Outcome::<_, ()>::ok(vec![1, 2]).into_value(), Ok(vec![1, 2]));
        assert_eq!(
            Outcome::<Vec<u8>, _>::err('e').into_value(),
            Err(ContainerError::WrongVariantAccess)
        );
        assert_eq!(Outcome::<(), _>::err('e').into_error(), Ok('e'));
        assert_eq!(
            Outcome::<_, char>::ok(()).into_error(),
            Err(ContainerError::WrongVariantAccess)
        );
    }

    #[test]
    fn as_ref_keeps_variant() {
        let outcome: Outcome<String, u8> = Outcome::ok("hi".to_string());
        let borrowed = outcome.as_ref();
        assert!(borrowed.is_ok());
        assert_eq!(borrowed.value().map(|s| s.len()), Ok(2));
    }

    #[test]
    fn map_and_map_err() {
        let ok = Outcome::<u8, u8>::ok(1).map_err(|e| e + 1).map(|v| v * 10);
        assert_eq!(ok.into_value(), Ok(10));
        let err = Outcome::<u8, u8>::err(1).map(|v| v * 10).map_err(|e| e + 1);
        assert_eq!(err.into_error(), Ok(2));
    }

    #[test]
    fn std_result_conversions() {
        let from_ok: Outcome<i32, &str> = Ok(3).into();
        assert_eq!(from_ok.value(), Ok(&3));
        let from_err: Outcome<i32, &str> = Err("no").into();
        assert_eq!(from_err.error(), Ok(&"no"));

        let back: Result<i32, &str> = from_err.into();
        assert_eq!(back, Err("no"));
        assert_eq!(from_ok.into_result(), Ok(3));
    }

    #[test]
    fn default_error_type_is_string() {
        let outcome: Outcome<()> = Outcome::err(String::from("x"));
        assert_eq!(outcome.into_error().as_deref(), Ok("x"));
    }
}
