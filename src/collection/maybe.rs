//! Absent-callback forms of the [`Collection`] operations.
//!
//! Each `maybe_*` method takes its callback (or input) as an `Option`. When
//! it is `None` the operation falls back to a fixed result instead of
//! failing:
//!
//! | Kind            | Fallback                 |
//! |-----------------|--------------------------|
//! | Transformation  | Copy of the receiver     |
//! | `maybe_reduce`, `maybe_max`, `maybe_min` | `T::default()` |
//! | `maybe_any_match`, `maybe_all_match` | `false` |
//! | `maybe_format_with` | Empty string         |
//! | `maybe_for_each` | No-op                   |
//! | `maybe_new`, `maybe_generate` | `None`     |

use std::cmp::Ordering;

use super::Collection;

fn absent(method_name: &'static str) {
    tracing::trace!(method = method_name, "absent argument, falling back");
}

impl<T> Collection<T> {
    /// Builds a collection from an optional producer.
    ///
    /// Returns `None` when `producer` is absent; otherwise behaves like
    /// [`Collection::generate`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let absent = Collection::<i32>::maybe_generate(None::<fn() -> i32>, 5);
    /// assert!(absent.is_none());
    ///
    /// let zeros = Collection::maybe_generate(Some(|| 0), 3);
    /// assert_eq!(zeros.map(|collection| collection.len()), Some(3));
    /// ```
    #[must_use]
    pub fn maybe_generate<F>(producer: Option<F>, count: isize) -> Option<Self>
    where
        F: FnMut() -> T,
    {
        let Some(producer) = producer else {
            absent("maybe_generate");
            return None;
        };
        Some(Self::generate(producer, count))
    }

    /// Like [`Collection::any_match`]; an absent predicate yields `false`.
    pub fn maybe_any_match<P>(&self, predicate: Option<P>) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        predicate.map_or_else(
            || {
                absent("maybe_any_match");
                false
            },
            |predicate| self.any_match(predicate),
        )
    }

    /// Like [`Collection::all_match`]; an absent predicate yields `false`.
    pub fn maybe_all_match<P>(&self, predicate: Option<P>) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        predicate.map_or_else(
            || {
                absent("maybe_all_match");
                false
            },
            |predicate| self.all_match(predicate),
        )
    }

    /// Like [`Collection::format_with`]; an absent formatter yields an empty
    /// string.
    pub fn maybe_format_with<F>(&self, formatter: Option<F>) -> String
    where
        F: FnMut(&T) -> String,
    {
        formatter.map_or_else(
            || {
                absent("maybe_format_with");
                String::new()
            },
            |formatter| self.format_with(formatter),
        )
    }

    /// Like [`Collection::for_each`]; an absent consumer does nothing.
    pub fn maybe_for_each<F>(&self, consumer: Option<F>)
    where
        F: FnMut(&T),
    {
        match consumer {
            Some(consumer) => self.for_each(consumer),
            None => absent("maybe_for_each"),
        }
    }
}

impl<T: Clone + PartialEq> Collection<T> {
    /// Copies an optional sequence into a collection.
    ///
    /// An absent sequence yields `None`; an empty one yields an empty
    /// collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// assert!(Collection::<i32>::maybe_new(None).is_none());
    /// assert_eq!(Collection::<i32>::maybe_new(Some(&[])), Some(Collection::empty()));
    /// ```
    #[must_use]
    pub fn maybe_new(sequence: Option<&[T]>) -> Option<Self> {
        let Some(sequence) = sequence else {
            absent("maybe_new");
            return None;
        };
        Some(Self::new(sequence))
    }

    fn copy_for_absent(&self, method_name: &'static str) -> Self {
        absent(method_name);
        self.clone()
    }

    /// Like [`Collection::map`]; an absent function yields a copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcollect::collection::Collection;
    ///
    /// let collection = Collection::new(&[1, 2, 3]);
    /// assert_eq!(collection.maybe_map(None::<fn(&i32) -> i32>), collection);
    /// assert_eq!(
    ///     collection.maybe_map(Some(|element: &i32| element * 2)).to_vec(),
    ///     vec![2, 4, 6]
    /// );
    /// ```
    #[must_use]
    pub fn maybe_map<F>(&self, function: Option<F>) -> Self
    where
        F: FnMut(&T) -> T,
    {
        match function {
            Some(function) => self.map(function),
            None => self.copy_for_absent("maybe_map"),
        }
    }

    /// Like [`Collection::flat_map`]; an absent function yields a copy of
    /// the receiver, not a doubled one.
    #[must_use]
    pub fn maybe_flat_map<F>(&self, function: Option<F>) -> Self
    where
        F: FnMut(&T) -> (T, T),
    {
        match function {
            Some(function) => self.flat_map(function),
            None => self.copy_for_absent("maybe_flat_map"),
        }
    }

    /// Like [`Collection::filter`]; an absent predicate keeps every element.
    #[must_use]
    pub fn maybe_filter<P>(&self, predicate: Option<P>) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        match predicate {
            Some(predicate) => self.filter(predicate),
            None => self.copy_for_absent("maybe_filter"),
        }
    }

    /// Like [`Collection::sort`]; an absent routine keeps the original order.
    #[must_use]
    pub fn maybe_sort<F>(&self, routine: Option<F>) -> Self
    where
        F: FnOnce(&mut [T]),
    {
        match routine {
            Some(routine) => self.sort(routine),
            None => self.copy_for_absent("maybe_sort"),
        }
    }

    /// Like [`Collection::sort_by`]; an absent comparator keeps the original
    /// order.
    #[must_use]
    pub fn maybe_sort_by<F>(&self, compare: Option<F>) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match compare {
            Some(compare) => self.sort_by(compare),
            None => self.copy_for_absent("maybe_sort_by"),
        }
    }

    /// Like [`Collection::replace`]; absent targets yield a copy.
    #[must_use]
    pub fn maybe_replace(&self, targets: Option<&[T]>, replacement: T) -> Self {
        match targets {
            Some(targets) => self.replace(targets, replacement),
            None => self.copy_for_absent("maybe_replace"),
        }
    }

    /// Like [`Collection::replace_all`]; absent targets yield a copy.
    #[must_use]
    pub fn maybe_replace_all(&self, targets: Option<&[T]>, replacement: T) -> Self {
        match targets {
            Some(targets) => self.replace_all(targets, replacement),
            None => self.copy_for_absent("maybe_replace_all"),
        }
    }
}

impl<T: Clone + PartialEq + Default> Collection<T> {
    /// Like [`Collection::reduce`]; an absent function yields `T::default()`.
    pub fn maybe_reduce<F>(&self, function: Option<F>) -> T
    where
        F: FnMut(T, T) -> T,
    {
        match function {
            Some(function) => self.reduce(function),
            None => {
                absent("maybe_reduce");
                T::default()
            }
        }
    }

    /// Like [`Collection::max`]; an absent comparator yields `T::default()`.
    pub fn maybe_max<F>(&self, compare: Option<F>) -> T
    where
        F: FnMut(T, T) -> T,
    {
        match compare {
            Some(compare) => self.max(compare),
            None => {
                absent("maybe_max");
                T::default()
            }
        }
    }

    /// Like [`Collection::min`]; an absent comparator yields `T::default()`.
    pub fn maybe_min<F>(&self, compare: Option<F>) -> T
    where
        F: FnMut(T, T) -> T,
    {
        match compare {
            Some(compare) => self.min(compare),
            None => {
                absent("maybe_min");
                T::default()
            }
        }
    }
}
