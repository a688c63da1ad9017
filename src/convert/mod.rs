//! Conversion helpers.
//!
//! This module maps sequences from one element type to another and renders
//! primitive values as canonical strings:
//!
//! - [`map_slice`]: Maps `&[T]` to `Vec<V>` through a function
//! - [`int_to_string`]: Decimal rendering of any primitive integer
//! - [`float_to_string`]: Fixed-point rendering with six fractional digits
//! - [`bool_to_string`]: `"true"` / `"false"`
//! - [`char_to_string`]: Quoted character literal, e.g. `'A'`
//! - [`complex_to_string`]: `(re+imi)` rendering of a [`Complex`]
//!
//! The formatting helpers are total: they have no error conditions.
//!
//! # Examples
//!
//! ```rust
//! use funcollect::convert::{float_to_string, map_slice};
//!
//! let prices = [1.5_f64, 2.25];
//! let labels = map_slice(&prices, |price| float_to_string(*price));
//! assert_eq!(labels, vec!["1.500000", "2.250000"]);
//! ```

mod complex;
mod format;

pub use complex::Complex;
pub use format::{bool_to_string, char_to_string, complex_to_string, float_to_string, int_to_string};

/// Maps every element of `slice` through `function`, in order.
///
/// The result has exactly one output per input.
///
/// # Examples
///
/// ```rust
/// use funcollect::convert::map_slice;
///
/// let lengths = map_slice(&["a", "bcd", ""], |text| text.len());
/// assert_eq!(lengths, vec![1, 3, 0]);
/// ```
pub fn map_slice<T, V, F>(slice: &[T], function: F) -> Vec<V>
where
    F: FnMut(&T) -> V,
{
    slice.iter().map(function).collect()
}

/// Like [`map_slice`], but with an optional input and an optional function.
///
/// Returns `None` when either is absent. An empty input with a present
/// function yields `Some` of an empty vector.
///
/// # Examples
///
/// ```rust
/// use funcollect::convert::maybe_map_slice;
///
/// let numbers = [1, 2, 3];
/// let rendered = maybe_map_slice(Some(&numbers[..]), Some(|number: &i32| number.to_string()));
/// assert_eq!(rendered, Some(vec!["1".to_string(), "2".to_string(), "3".to_string()]));
///
/// let absent = maybe_map_slice(None::<&[i32]>, Some(|number: &i32| number.to_string()));
/// assert_eq!(absent, None);
/// ```
pub fn maybe_map_slice<T, V, F>(slice: Option<&[T]>, function: Option<F>) -> Option<Vec<V>>
where
    F: FnMut(&T) -> V,
{
    match (slice, function) {
        (Some(slice), Some(function)) => Some(map_slice(slice, function)),
        (slice, function) => {
            tracing::trace!(
                slice_present = slice.is_some(),
                function_present = function.is_some(),
                "absent argument, no conversion performed"
            );
            None
        }
    }
}
