//! Error types for the checked collection operations.
//!
//! The core operations of [`Collection`](super::Collection) never fail: out
//! of range counts are clamped and absent callbacks fall back to a no-op.
//! The errors here are produced only by the explicitly checked variants
//! [`try_limit`](super::Collection::try_limit) and
//! [`try_skip`](super::Collection::try_skip).

/// Represents a count argument that does not fit the collection.
///
/// A count is out of range when it is negative or larger than the length
/// of the collection it is applied to.
///
/// # Examples
///
/// ```rust
/// use funcollect::collection::CountOutOfRangeError;
///
/// let error = CountOutOfRangeError {
///     method_name: "try_limit",
///     count: 10,
///     length: 5,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "Collection::try_limit: count 10 is out of range for length 5"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountOutOfRangeError {
    /// The name of the method that rejected the count.
    pub method_name: &'static str,
    /// The count that was requested.
    pub count: isize,
    /// The length of the collection at the time of the call.
    pub length: usize,
}

impl std::fmt::Display for CountOutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Collection::{}: count {} is out of range for length {}",
            self.method_name, self.count, self.length
        )
    }
}

impl std::error::Error for CountOutOfRangeError {}

/// Represents errors returned by the checked collection operations.
///
/// # Examples
///
/// ```rust
/// use funcollect::collection::{CollectionError, CountOutOfRangeError};
///
/// let error = CollectionError::CountOutOfRange(CountOutOfRangeError {
///     method_name: "try_skip",
///     count: -1,
///     length: 3,
/// });
/// assert_eq!(
///     format!("{}", error),
///     "Collection::try_skip: count -1 is out of range for length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A count argument was negative or exceeded the collection length.
    CountOutOfRange(CountOutOfRangeError),
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountOutOfRange(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CountOutOfRange(error) => Some(error),
        }
    }
}

impl From<CountOutOfRangeError> for CollectionError {
    fn from(error: CountOutOfRangeError) -> Self {
        Self::CountOutOfRange(error)
    }
}
