//! # permars
//!
//! Persistent data structures for Rust: a balanced ordered map, a cons
//! list, and optional values, all with structural sharing.
//!
//! ## Overview
//!
//! Every "mutating" operation in this library returns a new structure and
//! leaves the original untouched. Unmodified substructure is shared by
//! reference between versions, so old versions stay observable and valid
//! for as long as anything holds them:
//!
//! - [`persistent::PersistentOrderedMap`]: immutable ordered map (AVL tree)
//! - [`persistent::PersistentList`]: immutable singly-linked cons list
//! - [`option::Optional`]: a two-variant value container with explicit
//!   empty/present accessors
//! - [`typeclass`]: the functional trait layer (Functor, Monad, Foldable,
//!   Semigroup, Monoid) these structures participate in
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits (enabled by default)
//! - `persistent`: the persistent data structures (enabled by default)
//! - `arc`: share nodes with `Arc` instead of `Rc`, making the structures
//!   `Send + Sync`
//! - `full`: everything above
//!
//! ## Example
//!
//! ```rust
//! use permars::persistent::PersistentOrderedMap;
//!
//! let map = PersistentOrderedMap::new()
//!     .update(5, "a")
//!     .update(3, "b");
//! let updated = map.update(5, "A");
//!
//! // The original version is still observable
//! assert_eq!(map.find(&5), Ok(&"a"));
//! assert_eq!(updated.find(&5), Ok(&"A"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use permars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    pub use crate::option::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub mod option;

#[cfg(feature = "persistent")]
pub mod persistent;
