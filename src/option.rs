//! Optional values - a container that either holds a value or is empty.
//!
//! This module provides the [`Optional<T>`] type, a two-variant container
//! used throughout the crate as the result shape of lookups that must not
//! fail on a missing entry (see
//! [`PersistentOrderedMap::try_find`](crate::persistent::PersistentOrderedMap::try_find)).
//!
//! Unlike the standard library's `Option`, access to the wrapped value is
//! an explicit, fallible operation: [`Optional::value`] returns a
//! `Result` carrying [`EmptyOptionalError`] when there is nothing inside.
//! Conversions to and from `Option` are provided for interop.
//!
//! # Examples
//!
//! ```rust
//! use permars::option::Optional;
//!
//! let present = Optional::present(42);
//! assert!(present.has_value());
//! assert_eq!(present.value(), Ok(&42));
//!
//! let empty: Optional<i32> = Optional::empty();
//! assert!(empty.value().is_err());
//! assert_eq!(empty.try_get(), None);
//! ```

use std::fmt;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Applicative, Foldable, Functor, Monad, TypeConstructor};

// =============================================================================
// Error Type
// =============================================================================

/// The error returned when accessing the value of an empty [`Optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyOptionalError;

impl fmt::Display for EmptyOptionalError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("optional is empty")
    }
}

impl std::error::Error for EmptyOptionalError {}

// =============================================================================
// Optional Definition
// =============================================================================

/// A container that either holds a value (`Present`) or is empty (`Empty`).
///
/// Two optionals compare equal when both are empty, or both are present
/// and their values compare equal.
///
/// # Examples
///
/// ```rust
/// use permars::option::Optional;
///
/// let found = Optional::present("hit");
/// let missing: Optional<&str> = Optional::empty();
///
/// assert_eq!(found.value_or("default"), "hit");
/// assert_eq!(missing.value_or("default"), "default");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// The empty variant; holds nothing.
    Empty,
    /// The present variant; holds a value.
    Present(T),
}

impl<T> Optional<T> {
    /// Creates an empty optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permars::option::Optional;
    ///
    /// let empty: Optional<i32> = Optional::empty();
    /// assert!(!empty.has_value());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Creates an optional holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permars::option::Optional;
    ///
    /// let present = Optional::present(42);
    /// assert!(present.has_value());
    /// ```
    #[inline]
    #[must_use]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns `true` if this optional holds a value.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this optional is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns a reference to the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOptionalError`] if the optional is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permars::option::{EmptyOptionalError, Optional};
    ///
    /// assert_eq!(Optional::present(5).value(), Ok(&5));
    /// assert_eq!(Optional::<i32>::empty().value(), Err(EmptyOptionalError));
    /// ```
    #[inline]
    pub const fn value(&self) -> Result<&T, EmptyOptionalError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(EmptyOptionalError),
        }
    }

    /// Consumes the optional and returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOptionalError`] if the optional is empty.
    #[inline]
    pub fn into_value(self) -> Result<T, EmptyOptionalError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(EmptyOptionalError),
        }
    }

    /// Returns a reference to the contained value, or `None` when empty.
    ///
    /// This is the non-failing accessor; prefer it when a missing value is
    /// an expected outcome rather than an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permars::option::Optional;
    ///
    /// assert_eq!(Optional::present(5).try_get(), Some(&5));
    /// assert_eq!(Optional::<i32>::empty().try_get(), None);
    /// ```
    #[inline]
    pub const fn try_get(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Consumes the optional and returns the contained value, or `default`
    /// when empty.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Applies a function to the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permars::option::Optional;
    ///
    /// let doubled = Optional::present(21).map(|n| n * 2);
    /// assert_eq!(doubled, Optional::present(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Applies a function returning another optional to the contained
    /// value, flattening the result.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Clones the contained value into a standard `Option`.
    #[inline]
    pub fn cloned(&self) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Self::Present(value) => Some(value.clone()),
            Self::Empty => None,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Empty, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Empty => formatter.write_str("Empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Empty => formatter.write_str("Empty"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

#[cfg(feature = "typeclass")]
impl<T> Functor for Optional<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

#[cfg(feature = "typeclass")]
impl<T> Applicative for Optional<T> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
            _ => Optional::Empty,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Optional<B>,
        third: Optional<C>,
        function: F,
    ) -> Optional<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Optional::Present(b), Optional::Present(c)) => {
                Optional::Present(function(a, b, c))
            }
            _ => Optional::Empty,
        }
    }
}

#[cfg(feature = "typeclass")]
impl<T> Monad for Optional<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        self.and_then(function)
    }
}

#[cfg(feature = "typeclass")]
impl<T> Foldable for Optional<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Present(value) => function(init, value),
            Self::Empty => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Present(value) => function(value, init),
            Self::Empty => init,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
