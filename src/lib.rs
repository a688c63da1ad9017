//! # funcollect
//!
//! An immutable, chainable collection wrapper for Rust.
//!
//! ## Overview
//!
//! This library wraps an ordered sequence of equality-comparable values and
//! exposes stream-like operations on it. Every operation leaves the receiver
//! untouched and hands back a freshly allocated value. It includes:
//!
//! - **Collection**: `map`, `filter`, `reduce`, `sort`, `distinct`, `replace`
//!   and friends, with explicit policies for empty inputs, absent callbacks
//!   and out-of-range counts
//! - **Convert**: slice-to-slice mapping and canonical stringification of
//!   integers, floats, booleans, characters and complex numbers
//!
//! ## Feature Flags
//!
//! - `collection`: The [`Collection`](collection::Collection) type
//! - `convert`: Conversion helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcollect::prelude::*;
//!
//! let evens = Collection::new(&[1, 2, 3, 4, 5])
//!     .filter(|element| element % 2 == 0)
//!     .map(|element| element * 10);
//! assert_eq!(evens.to_vec(), vec![20, 40]);
//!
//! let labels = map_slice(evens.as_slice(), |element| int_to_string(*element));
//! assert_eq!(labels, vec!["20".to_string(), "40".to_string()]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use funcollect::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "convert")]
    pub use crate::convert::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "convert")]
pub mod convert;
