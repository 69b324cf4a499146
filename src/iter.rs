//! Iterators over the distinct elements of a multiset
use std::collections::hash_map;
use std::iter::FusedIterator;

/// A borrowing iterator over the distinct elements of a [MultiSet](crate::MultiSet)
///
/// Created by [MultiSet::iter](crate::MultiSet::iter). Each distinct element is yielded exactly
/// once, regardless of its multiplicity, in the container's current enumeration order. The
/// iterator borrows the multiset, so the container cannot be mutated while it is alive.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    keys: hash_map::Keys<'a, T, usize>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(keys: hash_map::Keys<'a, T, usize>) -> Self {
        Iter { keys }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the distinct elements of a [MultiSet](crate::MultiSet)
///
/// Created by the [IntoIterator] impl for [MultiSet](crate::MultiSet). Each distinct element is
/// yielded exactly once, regardless of its multiplicity.
#[derive(Debug)]
pub struct IntoIter<T> {
    keys: hash_map::IntoKeys<T, usize>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(keys: hash_map::IntoKeys<T, usize>) -> Self {
        IntoIter { keys }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::MultiSet;

    #[test]
    fn exact_size() {
        let set: MultiSet<u32> = [1, 1, 2, 3].into_iter().collect();
        let mut elements = set.iter();
        assert_eq!(elements.len(), 3);
        elements.next();
        assert_eq!(elements.len(), 2);
        assert_eq!(set.into_iter().len(), 3);
    }
}
