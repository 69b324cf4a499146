//! A generic multiset (bag) container backed by a hash map
//!
//! A [MultiSet] keeps one entry per distinct element together with a strictly positive
//! multiplicity, instead of the simple presence flag of a plain set. Elements can be inserted and
//! removed with explicit counts, combined with multiset algebra (sum, difference, intersection),
//! compared against arbitrary element sequences, converted to plain map and set views, and
//! rendered as text.
//!
//! The API has two clearly separated operation families:
//!
//! - The pure binary operations [MultiSet::sum], [MultiSet::difference] and
//!   [MultiSet::intersection] (also reachable through the `+`, `-` and `*` operators on
//!   references) allocate a fresh multiset and leave both operands untouched.
//! - The combining mutators [MultiSet::union_with], [MultiSet::intersect_with],
//!   [MultiSet::except_with] and [MultiSet::symmetric_except_with] modify the receiver in place
//!   and hand it back for chaining.
//!
//! Operations that accept another operand or sequence model a possibly absent argument as an
//! [Option] and report [Error::NullArgument] for [None] rather than tolerating it silently. All
//! other conceptually fallible operations treat absence as normal: missing lookups read as zero,
//! removing an absent element is a no-op, and positional access out of range returns [None].
//!
//! The container is not thread safe and holds no interior mutability; share it across threads
//! only behind external synchronization. Iterators borrow the container, so mutation during
//! iteration is rejected at compile time rather than observed as a stale view.
//!
//! # Example
//!
//! ```
//! use multiset::MultiSet;
//!
//! let mut stock: MultiSet<&str> = ["apple", "pear", "apple"].into_iter().collect();
//! assert_eq!(stock.multiplicity(&"apple"), 2);
//!
//! stock.insert_n("plum", 3).remove(&"pear");
//! assert_eq!(stock.len(), 2);
//!
//! let delivery: MultiSet<&str> = ["plum", "apple"].into_iter().collect();
//! let combined = &stock + &delivery;
//! assert_eq!(combined.multiplicity(&"plum"), 4);
//! ```
#![warn(missing_docs)]

mod iter;

use itertools::Itertools;
use std::collections::hash_map::RandomState;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter::repeat;
use std::ops::{Add, Index, Mul, Sub};

pub use iter::{IntoIter, Iter};

/// An error from a multiset operation handed an absent argument
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A required operand or sequence argument was [None]
    NullArgument,
}

impl Display for Error {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::NullArgument => write!(out, "required operand or sequence was absent"),
        }
    }
}

impl std::error::Error for Error {}

/// A multiset: a collection tracking an integer multiplicity per distinct element
///
/// Every stored multiplicity is at least one; driving a multiplicity to zero removes the entry
/// outright, so [MultiSet::contains] and positive [MultiSet::multiplicity] always agree. The
/// backing map keeps a single entry per distinct element under the configured hash strategy.
///
/// Equality between elements is whatever `T`'s [Eq] implementation says, while the hashing half
/// of the strategy is injectable at construction through the `S` parameter, exactly like the
/// standard library's [HashMap]. The strategy is fixed for the life of the instance.
///
/// Enumeration order among distinct elements is unspecified, but stable as long as the instance
/// is not modified; [MultiSet::element_at] indexes into that same order.
///
/// # Example
///
/// ```
/// use multiset::MultiSet;
///
/// let mut set = MultiSet::new();
/// set.insert_n('x', 2).insert('y');
/// assert_eq!(set.multiplicity(&'x'), 2);
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone)]
pub struct MultiSet<T, S = RandomState> {
    counts: HashMap<T, usize, S>,
}

impl<T> MultiSet<T> {
    /// Create an empty multiset with the default hash strategy
    pub fn new() -> Self {
        MultiSet {
            counts: HashMap::new(),
        }
    }
}

impl<T, S> MultiSet<T, S> {
    /// Create an empty multiset with an injected hash strategy
    ///
    /// Equality of elements is still governed by `T`'s [Eq] implementation; the strategy only
    /// controls hashing, and must therefore be consistent with it.
    pub fn with_hasher(hasher: S) -> Self {
        MultiSet {
            counts: HashMap::with_hasher(hasher),
        }
    }

    /// The number of distinct elements, irrespective of their multiplicities
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no element is held
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// A reference to the hash strategy supplied at construction
    pub fn hasher(&self) -> &S {
        self.counts.hasher()
    }

    /// Iterate over the distinct elements, each yielded once regardless of multiplicity
    ///
    /// The order is unspecified but stable while the multiset is unmodified.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.counts.keys())
    }

    /// The distinct element at a position in the current enumeration order
    ///
    /// Returns [None] when `index` is outside `[0, len)`, so callers can probe safely.
    pub fn element_at(&self, index: usize) -> Option<&T> {
        self.counts.keys().nth(index)
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl<T: Eq + Hash, S: BuildHasher> MultiSet<T, S> {
    /// Seed a multiset from a sequence with an injected hash strategy
    ///
    /// Each occurrence in the sequence contributes multiplicity one, accumulating: an element
    /// appearing twice ends up with multiplicity two. Seeding from a sequence without a custom
    /// strategy goes through [FromIterator] (`sequence.into_iter().collect()`).
    pub fn from_iter_with_hasher<I>(sequence: I, hasher: S) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_hasher(hasher);
        set.extend(sequence);
        set
    }

    /// The multiplicity of an element, or zero when absent
    pub fn multiplicity(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// True when the element is held with any positive multiplicity
    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// Insert one occurrence of an element
    pub fn insert(&mut self, item: T) {
        self.insert_n(item, 1);
    }

    /// Raise an element's multiplicity by `count`, entering it fresh when absent
    ///
    /// A zero `count` is a no-op. Returns the receiver for chaining; this mutates in place,
    /// unlike [MultiSet::sum].
    pub fn insert_n(&mut self, item: T, count: usize) -> &mut Self {
        if count > 0 {
            *self.counts.entry(item).or_insert(0) += count;
        }
        self
    }

    /// Remove one occurrence of an element, reporting whether an entry existed
    pub fn remove(&mut self, item: &T) -> bool {
        let held = self.counts.contains_key(item);
        self.remove_n(item, 1);
        held
    }

    /// Lower an element's multiplicity by `count`
    ///
    /// Removing at least the stored multiplicity deletes the entry outright; the count never
    /// goes negative. A zero `count` or an absent element is a no-op. Returns the receiver for
    /// chaining; this mutates in place, unlike [MultiSet::difference].
    pub fn remove_n(&mut self, item: &T, count: usize) -> &mut Self {
        if count > 0 {
            let held = self.multiplicity(item);
            if held > count {
                if let Some(entry) = self.counts.get_mut(item) {
                    *entry -= count;
                }
            } else if held > 0 {
                self.counts.remove(item);
            }
        }
        self
    }

    /// Delete an element's entry regardless of its multiplicity
    pub fn remove_all(&mut self, item: &T) -> &mut Self {
        self.counts.remove(item);
        self
    }

    /// True when every distinct element held also appears in `other`
    ///
    /// The sequence is treated as a set of its distinct values; multiplicities on either side
    /// are not consulted. Fails with [Error::NullArgument] when `other` is [None].
    pub fn is_subset_of<I>(&self, other: Option<I>) -> Result<bool, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let distinct = Self::distinct(other)?;
        Ok(self.counts.keys().all(|item| distinct.contains(item)))
    }

    /// True when every distinct element of `other` is held
    ///
    /// Fails with [Error::NullArgument] when `other` is [None].
    pub fn is_superset_of<I>(&self, other: Option<I>) -> Result<bool, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let other = other.ok_or(Error::NullArgument)?;
        Ok(other.into_iter().all(|item| self.contains(&item)))
    }

    /// True when [MultiSet::is_subset_of] holds and `other` has an element not held here
    ///
    /// Fails with [Error::NullArgument] when `other` is [None].
    pub fn is_proper_subset_of<I>(&self, other: Option<I>) -> Result<bool, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let distinct = Self::distinct(other)?;
        Ok(self.counts.keys().all(|item| distinct.contains(item))
            && distinct.iter().any(|item| !self.contains(item)))
    }

    /// True when [MultiSet::is_superset_of] holds and an element held here is absent from `other`
    ///
    /// Fails with [Error::NullArgument] when `other` is [None].
    pub fn is_proper_superset_of<I>(&self, other: Option<I>) -> Result<bool, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let distinct = Self::distinct(other)?;
        Ok(distinct.iter().all(|item| self.contains(item))
            && self.counts.keys().any(|item| !distinct.contains(item)))
    }

    /// True when this multiset and `other` hold exactly the same distinct elements
    ///
    /// Despite the name this compares distinct element membership only, ignoring multiplicities
    /// on both sides: `{a: 2}` equals the sequence `[a, a, a]`. Use `==` between two multisets
    /// for multiplicity-sensitive equality. Fails with [Error::NullArgument] when `other` is
    /// [None].
    pub fn multiset_equals<I>(&self, other: Option<I>) -> Result<bool, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let distinct = Self::distinct(other)?;
        Ok(self.counts.keys().all(|item| distinct.contains(item))
            && distinct.iter().all(|item| self.contains(item)))
    }

    /// True when any element of `other` is held
    ///
    /// Fails with [Error::NullArgument] when `other` is [None].
    pub fn overlaps<I>(&self, other: Option<I>) -> Result<bool, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let other = other.ok_or(Error::NullArgument)?;
        Ok(other.into_iter().any(|item| self.contains(&item)))
    }

    /// Add each distinct element of `other` not already held, at multiplicity one
    ///
    /// Multiplicities of elements already held are left alone. Mutates in place and returns the
    /// receiver for chaining. Fails with [Error::NullArgument] when `other` is [None].
    pub fn union_with<I>(&mut self, other: Option<I>) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let other = other.ok_or(Error::NullArgument)?;
        for item in other {
            if !self.contains(&item) {
                self.insert(item);
            }
        }
        Ok(self)
    }

    /// Drop every held element that does not appear in `other`
    ///
    /// Mutates in place and returns the receiver for chaining. Fails with
    /// [Error::NullArgument] when `other` is [None].
    pub fn intersect_with<I>(&mut self, other: Option<I>) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let keep = Self::distinct(other)?;
        self.counts.retain(|item, _| keep.contains(item));
        Ok(self)
    }

    /// Remove one occurrence for every element of `other` that is held
    ///
    /// An element appearing twice in the sequence loses two occurrences. Mutates in place and
    /// returns the receiver for chaining. Fails with [Error::NullArgument] when `other` is
    /// [None].
    pub fn except_with<I>(&mut self, other: Option<I>) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let other = other.ok_or(Error::NullArgument)?;
        for item in other {
            self.remove(&item);
        }
        Ok(self)
    }

    /// Keep exactly the elements held by exactly one of this multiset and `other`
    ///
    /// Elements common to both sides are deleted outright; distinct elements only in `other`
    /// enter at multiplicity one. The sequence is de-duplicated first, so a repeated incoming
    /// element is added once rather than added and then cancelled. Mutates in place and returns
    /// the receiver for chaining. Fails with [Error::NullArgument] when `other` is [None].
    pub fn symmetric_except_with<I>(&mut self, other: Option<I>) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let distinct = Self::distinct(other)?;
        for item in distinct {
            if self.contains(&item) {
                self.remove_all(&item);
            } else {
                self.insert(item);
            }
        }
        Ok(self)
    }

    fn distinct<I>(other: Option<I>) -> Result<HashSet<T>, Error>
    where
        I: IntoIterator<Item = T>,
    {
        other
            .map(|seq| seq.into_iter().collect())
            .ok_or(Error::NullArgument)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> MultiSet<T, S> {
    /// The multiset sum of two multisets
    ///
    /// Every element present in either operand appears with the sum of its multiplicities. A
    /// fresh multiset carrying this operand's hash strategy is allocated; neither operand is
    /// modified, unlike [MultiSet::union_with]. Fails with [Error::NullArgument] when `other`
    /// is [None]. Present operands can use `&a + &b` instead.
    pub fn sum(&self, other: Option<&Self>) -> Result<Self, Error> {
        other
            .map(|other| self.sum_impl(other))
            .ok_or(Error::NullArgument)
    }

    /// The multiset difference of two multisets
    ///
    /// Starts from this operand's multiplicities and subtracts `other`'s with the same clamp
    /// rule as [MultiSet::remove_n]: an element can disappear but never go negative. Allocates
    /// a fresh multiset; neither operand is modified. Fails with [Error::NullArgument] when
    /// `other` is [None]. Present operands can use `&a - &b` instead.
    pub fn difference(&self, other: Option<&Self>) -> Result<Self, Error> {
        other
            .map(|other| self.difference_impl(other))
            .ok_or(Error::NullArgument)
    }

    /// The multiset intersection of two multisets
    ///
    /// Every element present in both operands appears with the smaller of its two
    /// multiplicities; elements present in only one operand are absent. Allocates a fresh
    /// multiset; neither operand is modified, unlike [MultiSet::intersect_with]. Fails with
    /// [Error::NullArgument] when `other` is [None]. Present operands can use `&a * &b`
    /// instead.
    pub fn intersection(&self, other: Option<&Self>) -> Result<Self, Error> {
        other
            .map(|other| self.intersection_impl(other))
            .ok_or(Error::NullArgument)
    }

    /// An independent copy of the element to multiplicity mapping
    ///
    /// Mutating the returned map never affects this multiset.
    pub fn to_map(&self) -> HashMap<T, usize, S> {
        self.counts.clone()
    }

    /// An independent copy of the distinct elements, discarding multiplicities
    ///
    /// Mutating the returned set never affects this multiset.
    pub fn to_set(&self) -> HashSet<T, S> {
        let mut set = HashSet::with_hasher(self.counts.hasher().clone());
        set.extend(self.counts.keys().cloned());
        set
    }

    fn sum_impl(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (item, &count) in &other.counts {
            out.insert_n(item.clone(), count);
        }
        out
    }

    fn difference_impl(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (item, &count) in &other.counts {
            out.remove_n(item, count);
        }
        out
    }

    fn intersection_impl(&self, other: &Self) -> Self {
        let mut out = Self::with_hasher(self.counts.hasher().clone());
        for (item, &count) in &self.counts {
            let shared = count.min(other.multiplicity(item));
            if shared > 0 {
                out.insert_n(item.clone(), shared);
            }
        }
        out
    }
}

impl<T, S: Default> Default for MultiSet<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for MultiSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for MultiSet<T, S> {}

impl<T: Debug, S> Debug for MultiSet<T, S> {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        out.debug_map().entries(self.counts.iter()).finish()
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> FromIterator<T> for MultiSet<T, S> {
    fn from_iter<I>(sequence: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_iter_with_hasher(sequence, S::default())
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for MultiSet<T, S> {
    fn extend<I>(&mut self, sequence: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in sequence {
            self.insert(item);
        }
    }
}

/// Multiplicity lookup sugar: `set[&item]` is [MultiSet::multiplicity]
impl<'a, T: Eq + Hash, S: BuildHasher> Index<&'a T> for MultiSet<T, S> {
    type Output = usize;

    fn index(&self, item: &'a T) -> &usize {
        self.counts.get(item).unwrap_or(&0)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Add for &MultiSet<T, S> {
    type Output = MultiSet<T, S>;

    fn add(self, other: Self) -> MultiSet<T, S> {
        self.sum_impl(other)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Sub for &MultiSet<T, S> {
    type Output = MultiSet<T, S>;

    fn sub(self, other: Self) -> MultiSet<T, S> {
        self.difference_impl(other)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Mul for &MultiSet<T, S> {
    type Output = MultiSet<T, S>;

    fn mul(self, other: Self) -> MultiSet<T, S> {
        self.intersection_impl(other)
    }
}

impl<'a, T, S> IntoIterator for &'a MultiSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, S> IntoIterator for MultiSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.counts.into_keys())
    }
}

/// The flattened listing: one line per distinct element, the element written once per
/// occurrence, space separated
impl<T: Display, S> Display for MultiSet<T, S> {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        for (item, &count) in &self.counts {
            writeln!(out, "{}", repeat(item).take(count).format(" "))?;
        }
        Ok(())
    }
}

impl<T: Display, S> MultiSet<T, S> {
    /// Render with an explicit format flag
    ///
    /// The quantity flag `"Q"` yields one `<element> : <multiplicity>` line per distinct
    /// element; any other flag yields an empty string. The default flattened listing is the
    /// [Display] impl.
    pub fn format(&self, flag: &str) -> String {
        if flag == "Q" {
            self.counts
                .iter()
                .map(|(item, count)| format!("{} : {}\n", item, count))
                .collect()
        } else {
            String::new()
        }
    }
}
