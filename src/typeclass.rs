//! Type class traits for functional programming abstractions.
//!
//! This module provides the trait layer the crate's data structures
//! participate in:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GAT
//! - [`Functor`]: Mapping over a container value
//! - [`Applicative`]: Combining independent containerized computations
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Folding a structure down to a summary value
//! - [`Semigroup`]: Associative binary combination
//! - [`Monoid`]: Semigroup with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so there is no way to write a
//! trait abstracting over `Option<_>` or `Optional<_>` as bare type
//! constructors. [`TypeConstructor`] emulates this with a Generic
//! Associated Type: `WithType<B>` names "the same constructor applied to
//! `B`", which is enough to express Functor, Applicative and Monad.
//!
//! # Examples
//!
//! ```rust
//! use permars::typeclass::{Functor, Monad};
//! use permars::option::Optional;
//!
//! let present = Optional::present(5);
//! assert_eq!(present.fmap(|n| n * 2), Optional::present(10));
//!
//! let chained = Optional::present(5).flat_map(|n| {
//!     if n > 3 { Optional::present(n) } else { Optional::empty() }
//! });
//! assert_eq!(chained, Optional::present(5));
//! ```

// =============================================================================
// TypeConstructor
// =============================================================================

/// A trait representing a type constructor.
///
/// Emulates higher-kinded types with a Generic Associated Type so that
/// traits like [`Functor`] and [`Monad`] can be written generically.
///
/// # Associated Types
///
/// - `Inner`: the type parameter the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be equivalent to
/// `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type this constructor is applied to.
    ///
    /// For `Optional<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The `TypeConstructor<Inner = B>` constraint keeps the result usable
    /// for further transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

// =============================================================================
// Functor
// =============================================================================

/// A type class for containers a function can be mapped over.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use permars::typeclass::Functor;
/// use permars::option::Optional;
///
/// let x = Optional::present(5);
/// assert_eq!(x.fmap(|n| n.to_string()), Optional::present("5".to_string()));
///
/// let empty: permars::option::Optional<i32> = Optional::empty();
/// assert_eq!(empty.fmap(|n| n * 2), Optional::empty());
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor, preserving the
    /// container's structure.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Applicative
// =============================================================================

/// A [`Functor`] that can lift plain values and combine independent
/// computations.
///
/// # Laws
///
/// Identity: `pure(x).map2(fa, |f, a| ...)` behaves as plain application;
/// homomorphism: `pure(x).map2(pure(y), f) == pure(f(x, y))`.
///
/// # Examples
///
/// ```rust
/// use permars::typeclass::Applicative;
/// use permars::option::Optional;
///
/// let a = Optional::present(1);
/// let b = Optional::present(2);
/// assert_eq!(a.map2(b, |x, y| x + y), Optional::present(3));
///
/// let c = Optional::present(1);
/// let missing: Optional<i32> = Optional::empty();
/// assert_eq!(c.map2(missing, |x, y| x + y), Optional::empty());
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either computation is empty/failed in the sense appropriate to
    /// the container, the result is too.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        self.and_then(|a| other.map(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Result<B, E>, third: Result<C, E>, function: F) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.and_then(|a| second.and_then(|b| third.map(|c| function(a, b, c))))
    }
}

// =============================================================================
// Monad
// =============================================================================

/// An [`Applicative`] whose computations can depend on earlier results.
///
/// # Laws
///
/// Left identity: `pure(a).flat_map(f) == f(a)`; right identity:
/// `m.flat_map(pure) == m`; associativity:
/// `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`.
///
/// # Examples
///
/// ```rust
/// use permars::typeclass::Monad;
/// use permars::option::Optional;
///
/// let result = Optional::present(5).flat_map(|n| {
///     if n > 3 { Optional::present(n * 2) } else { Optional::empty() }
/// });
/// assert_eq!(result, Optional::present(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a new monad and flattens the result.
    ///
    /// This is Haskell's `>>=` (bind); the standard library spells the same
    /// operation `and_then` on `Option` and `Result`.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` represents a failure, the failure propagates and `next`
    /// is not returned.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Foldable
// =============================================================================

/// A type class for structures that can be folded to a summary value.
///
/// # Examples
///
/// ```rust
/// use permars::typeclass::Foldable;
///
/// let values = vec![1, 2, 3];
/// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 6);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// Equivalent to `Iterator::fold`.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permars::typeclass::Foldable;
    ///
    /// let words = vec!["per".to_string(), "mars".to_string()];
    /// let joined: String = words.fold_map(|word| word);
    /// assert_eq!(joined, "permars");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects all elements into a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

// =============================================================================
// Semigroup
// =============================================================================

/// A type with an associative binary combination.
///
/// # Laws
///
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Examples
///
/// ```rust
/// use permars::typeclass::Semigroup;
///
/// let result = String::from("Hello, ").combine(String::from("World!"));
/// assert_eq!(result, "Hello, World!");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Monoid
// =============================================================================

/// A [`Semigroup`] with an identity element.
///
/// # Laws
///
/// - `Self::empty().combine(a) == a`
/// - `a.combine(Self::empty()) == a`
///
/// # Examples
///
/// ```rust
/// use permars::typeclass::{Monoid, Semigroup};
///
/// assert_eq!(String::empty(), "");
/// assert_eq!(String::empty().combine("x".to_string()), "x");
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
