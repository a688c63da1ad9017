//! Immutable, chainable collections.
//!
//! This module provides [`Collection`], a thin wrapper over an ordered
//! sequence of equality-comparable values:
//!
//! - Transformations (`map`, `flat_map`, `filter`, `distinct`, `limit`,
//!   `skip`, `sort`, `reverse`, `replace`, `replace_all`) return a new
//!   collection
//! - Queries (`reduce`, `any_match`, `all_match`, `max`, `min`, `len`,
//!   `to_vec`, `format_with`, `for_each`) never allocate a new collection
//!
//! # Copy-on-construct
//!
//! A collection exclusively owns its backing storage. Construction copies the
//! input sequence, and every transformation builds a fresh backing store, so
//! two collections never alias the same elements.
//!
//! ```rust
//! use funcollect::collection::Collection;
//!
//! let original = Collection::new(&[3, 1, 2]);
//! let sorted = original.sort(|elements| elements.sort_unstable());
//! assert_eq!(original.to_vec(), vec![3, 1, 2]); // Original unchanged
//! assert_eq!(sorted.to_vec(), vec![1, 2, 3]);   // New collection
//! ```
//!
//! # Edge-case Policies
//!
//! No operation fails or panics on its arguments:
//!
//! | Input                          | Policy                              |
//! |--------------------------------|-------------------------------------|
//! | Empty collection               | Empty result, zero value, or `false` |
//! | Absent callback (`maybe_*`)    | Identity copy, zero value, or `false` |
//! | Count outside `[0, len]`       | Clamped into range                  |
//!
//! The checked [`Collection::try_limit`] and [`Collection::try_skip`] report
//! an out-of-range count as a [`CollectionError`] instead of clamping.
//!
//! ```rust
//! use funcollect::collection::Collection;
//!
//! let numbers = Collection::new(&[1, 2, 3]);
//! assert_eq!(numbers.limit(-1).len(), 0);
//! assert_eq!(numbers.skip(10).len(), 0);
//! assert!(numbers.try_limit(10).is_err());
//!
//! let unchanged = numbers.maybe_map(None::<fn(&i32) -> i32>);
//! assert_eq!(unchanged, numbers);
//! ```

mod error;
mod maybe;
mod sequence;

pub use error::{CollectionError, CountOutOfRangeError};
pub use sequence::Collection;
