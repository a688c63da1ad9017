//! The [`Collection`] type and its operations.
//!
//! `Collection` owns a `Vec<T>` and never hands out mutable access to it.
//! Transformations copy the elements they keep into a new backing store;
//! queries borrow the backing store and return plain values.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use super::error::{CollectionError, CountOutOfRangeError};

/// Number of pending replacement targets kept inline before spilling to
/// the heap.
const INLINE_TARGETS: usize = 8;

/// An immutable, ordered sequence of equality-comparable values.
///
/// Every transformation returns a new `Collection` built on a freshly
/// allocated backing store; the receiver is never modified.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(n)       |
/// | `map`/`filter` | O(n)       |
/// | `distinct`     | O(n^2)     |
/// | `limit`/`skip` | O(k)       |
/// | `replace`      | O(n * k)   |
/// | `len`          | O(1)       |
///
/// # Examples
///
/// ```rust
/// use funcollect::collection::Collection;
///
/// let collection = Collection::new(&[1, 2, 3, 4, 5]);
/// let sum = collection
///     .filter(|element| element % 2 == 1)
///     .reduce(|element, accumulator| element + accumulator);
/// assert_eq!(sum, 9);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Collection<T> {
    /// Exclusively owned backing store.
    elements: Vec<T>,
}

static_assertions::assert_impl_all!(Collection<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Collection<std::rc::Rc<i32>>: Send, Sync);

/// Clamps a signed count into `[0, length]`.
fn clamp_count(method_name: &'static str, count: isize, length: usize) -> usize {
    match usize::try_from(count) {
        Ok(count) if count <= length => count,
        Ok(_) => {
            tracing::trace!(method = method_name, count, length, "count clamped to length");
            length
        }
        Err(_) => {
            tracing::trace!(method = method_name, count, length, "negative count clamped to zero");
            0
        }
    }
}

/// Validates a signed count against `[0, length]` without clamping.
fn checked_count(
    method_name: &'static str,
    count: isize,
    length: usize,
) -> Result<usize, CountOutOfRangeError> {
    usize::try_from(count)
        .ok()
        .filter(|count| *count <= length)
        .ok_or(CountOutOfRangeError {
            method_name,
            count,
            length,
        })
}

impl<T> Collection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection: Collection<i32> = Collection::empty();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Builds a collection of `count` elements by calling `producer` once per
    /// position, in order.
    ///
    /// A `count` of zero or less yields an empty collection and never calls
    /// the producer.
    ///
    /// # Arguments
    ///
    /// * `producer` - A zero-argument function producing the next element
    /// * `count` - The number of elements to produce
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let mut next = 0;
    /// let collection = Collection::generate(
    ///     || {
    ///         next += 1;
    ///         next
    ///     },
    ///     5,
    /// );
    /// assert_eq!(collection.to_vec(), vec![1, 2, 3, 4, 5]);
    ///
    /// let none: Collection<i32> = Collection::generate(|| 0, -1);
    /// assert!(none.is_empty());
    /// ```
    #[must_use]
    pub fn generate<F>(producer: F, count: isize) -> Self
    where
        F: FnMut() -> T,
    {
        let count = usize::try_from(count).unwrap_or(0);
        Self {
            elements: std::iter::repeat_with(producer).take(count).collect(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the collection holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at `index`, or `None` when out of
    /// bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Lends the backing store as a read-only slice.
    ///
    /// The slice is a shared borrow, so the elements cannot be changed
    /// through it. Use [`Collection::to_vec`] for an owned copy.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Evaluation stops at the first match. An empty collection yields
    /// `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3, 4, 5]);
    /// assert!(collection.any_match(|element| *element == 4));
    /// assert!(!collection.any_match(|element| *element == 10));
    /// ```
    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Unlike [`Iterator::all`], an empty collection yields `false`: there is
    /// no vacuous truth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3, 4, 5]);
    /// assert!(collection.all_match(|element| *element > 0));
    ///
    /// let empty: Collection<i32> = Collection::empty();
    /// assert!(!empty.all_match(|element| *element > 0));
    /// ```
    pub fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.elements.is_empty() && self.elements.iter().all(predicate)
    }

    /// Concatenates `formatter(element)` for every element in order.
    ///
    /// No separator is inserted; the formatter supplies its own.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3]);
    /// assert_eq!(collection.format_with(|element| format!("{element}, ")), "1, 2, 3, ");
    /// ```
    pub fn format_with<F>(&self, formatter: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.elements.iter().map(formatter).collect()
    }

    /// Invokes `consumer` once per element, in order, for its side effects.
    pub fn for_each<F>(&self, consumer: F)
    where
        F: FnMut(&T),
    {
        self.elements.iter().for_each(consumer);
    }
}

impl<T: Clone + PartialEq> Collection<T> {
    /// Creates a collection holding a copy of `sequence`.
    ///
    /// Order and duplicates are preserved. An empty slice yields an empty
    /// collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let source = vec![1, 2, 2, 3];
    /// let collection = Collection::new(&source);
    /// assert_eq!(collection.to_vec(), source);
    /// ```
    #[must_use]
    pub fn new(sequence: &[T]) -> Self {
        Self {
            elements: sequence.to_vec(),
        }
    }

    /// Returns an owned copy of the elements.
    ///
    /// Mutating the returned vector never affects the collection.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Applies `function` to every element positionally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3]);
    /// assert_eq!(collection.map(|element| element + 1).to_vec(), vec![2, 3, 4]);
    /// ```
    #[must_use]
    pub fn map<F>(&self, function: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        Self {
            elements: self.elements.iter().map(function).collect(),
        }
    }

    /// Expands every element into a pair of elements.
    ///
    /// The result is exactly twice as long as the receiver: the pair produced
    /// for element `i` occupies positions `2i` and `2i + 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3]);
    /// let expanded = collection.flat_map(|element| (*element, element + 1));
    /// assert_eq!(expanded.to_vec(), vec![1, 2, 2, 3, 3, 4]);
    /// ```
    #[must_use]
    pub fn flat_map<F>(&self, mut function: F) -> Self
    where
        F: FnMut(&T) -> (T, T),
    {
        let mut elements = Vec::with_capacity(self.elements.len() * 2);
        for element in &self.elements {
            let (first, second) = function(element);
            elements.push(first);
            elements.push(second);
        }
        Self { elements }
    }

    /// Keeps the elements satisfying `predicate`, preserving their relative
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3, 4, 5]);
    /// assert_eq!(collection.filter(|element| element % 2 == 0).to_vec(), vec![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        }
    }

    /// Removes duplicates, keeping the first occurrence of each value.
    ///
    /// Only [`PartialEq`] is required, so the scan is quadratic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3, 1, 2]);
    /// assert_eq!(collection.distinct().to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut elements: Vec<T> = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            if !elements.contains(element) {
                elements.push(element.clone());
            }
        }
        Self { elements }
    }

    /// Keeps the first `count` elements.
    ///
    /// `count` is clamped to `[0, len]`: a negative count yields an empty
    /// collection and an oversized count yields a full copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3, 4, 5]);
    /// assert_eq!(collection.limit(2).to_vec(), vec![1, 2]);
    /// assert_eq!(collection.limit(10).to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(collection.limit(-1).is_empty());
    /// ```
    #[must_use]
    pub fn limit(&self, count: isize) -> Self {
        let count = clamp_count("limit", count, self.elements.len());
        Self::new(&self.elements[..count])
    }

    /// Drops the first `count` elements.
    ///
    /// `count` is clamped to `[0, len]` like [`Collection::limit`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3, 4, 5]);
    /// assert_eq!(collection.skip(3).to_vec(), vec![4, 5]);
    /// assert_eq!(collection.skip(-1).to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(collection.skip(10).is_empty());
    /// ```
    #[must_use]
    pub fn skip(&self, count: isize) -> Self {
        let count = clamp_count("skip", count, self.elements.len());
        Self::new(&self.elements[count..])
    }

    /// Keeps the first `count` elements, rejecting a count outside
    /// `[0, len]`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CountOutOfRange`] if `count` is negative or
    /// exceeds the length of the collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3]);
    /// assert_eq!(collection.try_limit(2).unwrap().to_vec(), vec![1, 2]);
    /// assert!(collection.try_limit(4).is_err());
    /// ```
    pub fn try_limit(&self, count: isize) -> Result<Self, CollectionError> {
        let count = checked_count("try_limit", count, self.elements.len())?;
        Ok(Self::new(&self.elements[..count]))
    }

    /// Drops the first `count` elements, rejecting a count outside
    /// `[0, len]`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CountOutOfRange`] if `count` is negative or
    /// exceeds the length of the collection.
    pub fn try_skip(&self, count: isize) -> Result<Self, CollectionError> {
        let count = checked_count("try_skip", count, self.elements.len())?;
        Ok(Self::new(&self.elements[count..]))
    }

    /// Runs a caller-supplied in-place sort routine on a copy of the
    /// elements.
    ///
    /// The routine receives the copy as a mutable slice; the receiver keeps
    /// its order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[2, 1, 4, 3, 5]);
    /// let sorted = collection.sort(|elements| elements.sort_unstable());
    /// assert_eq!(sorted.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(collection.to_vec(), vec![2, 1, 4, 3, 5]);
    /// ```
    #[must_use]
    pub fn sort<F>(&self, routine: F) -> Self
    where
        F: FnOnce(&mut [T]),
    {
        let mut elements = self.elements.clone();
        routine(&mut elements);
        Self { elements }
    }

    /// Stable-sorts a copy of the elements with `compare`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[2, 1, 3]);
    /// let descending = collection.sort_by(|left, right| right.cmp(left));
    /// assert_eq!(descending.to_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort(|elements| elements.sort_by(compare))
    }

    /// Returns the elements in reverse positional order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            elements: self.elements.iter().rev().cloned().collect(),
        }
    }

    /// Replaces the first occurrence of each target with `replacement`.
    ///
    /// The elements are scanned left to right. A target that matches is
    /// consumed and never matches again; duplicated targets are consumed one
    /// at a time. Scanning stops as soon as every target is consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3, 1, 2, 3]);
    /// let replaced = collection.replace(&[1, 2], 10);
    /// assert_eq!(replaced.to_vec(), vec![10, 10, 3, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn replace(&self, targets: &[T], replacement: T) -> Self {
        let mut pending: SmallVec<[&T; INLINE_TARGETS]> = targets.iter().collect();
        let mut elements = self.elements.clone();
        for element in &mut elements {
            if pending.is_empty() {
                break;
            }
            if let Some(position) = pending.iter().position(|target| **target == *element) {
                pending.remove(position);
                element.clone_from(&replacement);
            }
        }
        Self { elements }
    }

    /// Replaces every occurrence of any target with `replacement`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3, 1, 2, 3]);
    /// let replaced = collection.replace_all(&[1, 2], 10);
    /// assert_eq!(replaced.to_vec(), vec![10, 10, 3, 10, 10, 3]);
    /// ```
    #[must_use]
    pub fn replace_all(&self, targets: &[T], replacement: T) -> Self {
        if targets.is_empty() {
            return self.clone();
        }
        Self {
            elements: self
                .elements
                .iter()
                .map(|element| {
                    if targets.contains(element) {
                        replacement.clone()
                    } else {
                        element.clone()
                    }
                })
                .collect(),
        }
    }
}

impl<T: Clone + PartialEq + Default> Collection<T> {
    /// Folds the elements left to right, starting from `T::default()`.
    ///
    /// `function` receives `(element, accumulator)` and returns the next
    /// accumulator. An empty collection yields `T::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3, 4, 5]);
    /// assert_eq!(collection.reduce(|element, accumulator| element + accumulator), 15);
    ///
    /// let empty: Collection<i32> = Collection::empty();
    /// assert_eq!(empty.reduce(|element, accumulator| element + accumulator), 0);
    /// ```
    pub fn reduce<F>(&self, mut function: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.elements
            .iter()
            .cloned()
            .fold(T::default(), |accumulator, element| {
                function(element, accumulator)
            })
    }

    /// Returns the winner of `compare` folded over adjacent pairs.
    ///
    /// `compare` returns the larger of its two arguments. Collections with
    /// fewer than two elements yield `T::default()`, even when one element is
    /// present.
    ///
    /// # Pairwise Fold
    ///
    /// The result is seeded with `compare(e[0], e[1])` and then, for every
    /// `i` in `1..len - 1`, combined as
    /// `compare(result, compare(e[i], e[i + 1]))`. `compare` is therefore
    /// invoked `2 * len - 3` times. For a comparator that is a total order
    /// this equals the maximum, but a non-associative comparator observes the
    /// pairing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[3, 5, 1, 4]);
    /// assert_eq!(collection.max(|left, right| left.max(right)), 5);
    ///
    /// let single = Collection::new(&[7]);
    /// assert_eq!(single.max(|left, right| left.max(right)), 0);
    /// ```
    pub fn max<F>(&self, compare: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.fold_adjacent_pairs(compare)
    }

    /// Returns the winner of `compare` folded over adjacent pairs.
    ///
    /// `compare` returns the smaller of its two arguments. Follows the same
    /// pairwise fold as [`Collection::max`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[3, 5, 1, 4]);
    /// assert_eq!(collection.min(|left, right| left.min(right)), 1);
    /// ```
    pub fn min<F>(&self, compare: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.fold_adjacent_pairs(compare)
    }

    fn fold_adjacent_pairs<F>(&self, mut compare: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        match self.elements.as_slice() {
            [first, second, rest @ ..] => {
                let seed = compare(first.clone(), second.clone());
                let mut previous = second;
                rest.iter().fold(seed, |result, next| {
                    let current = compare(previous.clone(), next.clone());
                    previous = next;
                    compare(result, current)
                })
            }
            _ => T::default(),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Collection<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    /// Takes ownership of `elements` as the backing store.
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    #[inline]
    fn from(sequence: &[T]) -> Self {
        Self {
            elements: sequence.to_vec(),
        }
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
