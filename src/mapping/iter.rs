use core::slice;
use std::vec;

use crate::Value;

/// An immutable iterator over a [`Mapping`][crate::Mapping].
///
/// See [`Mapping::iter`][crate::Mapping::iter].
#[derive(Clone)]
pub struct Iter<'a> {
    iter: slice::Iter<'a, (String, Value)>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(slice: &'a [(String, Value)]) -> Self {
        Self { iter: slice.iter() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.iter.next()?;
        Some((key.as_str(), value))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let (key, value) = self.iter.nth(n)?;
        Some((key.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (key, value) = self.iter.next_back()?;
        Some((key.as_str(), value))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let (key, value) = self.iter.nth_back(n)?;
        Some((key.as_str(), value))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// A mutable iterator over a [`Mapping`][crate::Mapping].
///
/// See [`Mapping::iter_mut`][crate::Mapping::iter_mut].
pub struct IterMut<'a> {
    iter: slice::IterMut<'a, (String, Value)>,
}

impl<'a> IterMut<'a> {
    #[inline]
    pub(crate) fn new(slice: &'a mut [(String, Value)]) -> Self {
        Self {
            iter: slice.iter_mut(),
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.iter.next()?;
        Some((key.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (key, value) = self.iter.next_back()?;
        Some((key.as_str(), value))
    }
}

impl ExactSizeIterator for IterMut<'_> {}

/// An owning iterator over a [`Mapping`][crate::Mapping].
pub struct IntoIter {
    iter: vec::IntoIter<(String, Value)>,
}

impl IntoIter {
    #[inline]
    pub(crate) fn new(entries: Vec<(String, Value)>) -> Self {
        Self {
            iter: entries.into_iter(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = (String, Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}
