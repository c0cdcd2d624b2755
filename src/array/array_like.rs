use std::collections::VecDeque;
use std::ops::Range;

use super::Sparse;

/// An ordered, indexable collection with a known length, where any slot may be empty.
///
/// The functions in [`array`](super) are written against this trait so that they accept slices,
/// arrays, [`Vec`]s and [`VecDeque`]s as well as [`Sparse`] collections with empty slots. Dense
/// collections simply never report an empty slot.
pub trait ArrayLike {
    type Item;

    /// The owned collection produced by [`slice`](ArrayLike::slice). Slicing a [`Sparse`]
    /// collection keeps its empty slots, so it produces another Sparse collection.
    type Owned;

    /// Returns the number of slots, including empty ones.
    fn length(&self) -> usize;

    /// Returns the element at `index`, or [`None`] if the slot is empty or out of bounds.
    fn slot(&self, index: usize) -> Option<&Self::Item>;

    /// Copies the slots within `range` into a new owned collection. The range is clamped to the
    /// bounds of self, so this never panics.
    fn slice(&self, range: Range<usize>) -> Self::Owned
    where
        Self::Item: Clone;

    /// Returns true if the slot at `index` exists and isn't empty.
    fn has(&self, index: usize) -> bool {
        self.slot(index).is_some()
    }

    /// Copies every slot into a new owned collection.
    fn to_owned_array(&self) -> Self::Owned
    where
        Self::Item: Clone,
    {
        self.slice(0..self.length())
    }
}

/// Clamps `range` so that it lies within `0..len` and doesn't run backwards.
pub(crate) fn clamp_range(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    let start = range.start.min(end);
    start..end
}

impl<T> ArrayLike for [T] {
    type Item = T;
    type Owned = Vec<T>;

    fn length(&self) -> usize {
        self.len()
    }

    fn slot(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn slice(&self, range: Range<usize>) -> Vec<T>
    where
        T: Clone,
    {
        self[clamp_range(range, self.len())].to_vec()
    }
}

impl<T, const N: usize> ArrayLike for [T; N] {
    type Item = T;
    type Owned = Vec<T>;

    fn length(&self) -> usize {
        N
    }

    fn slot(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn slice(&self, range: Range<usize>) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().slice(range)
    }
}

impl<T> ArrayLike for Vec<T> {
    type Item = T;
    type Owned = Vec<T>;

    fn length(&self) -> usize {
        self.len()
    }

    fn slot(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn slice(&self, range: Range<usize>) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().slice(range)
    }
}

impl<T> ArrayLike for VecDeque<T> {
    type Item = T;
    type Owned = Vec<T>;

    fn length(&self) -> usize {
        self.len()
    }

    fn slot(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn slice(&self, range: Range<usize>) -> Vec<T>
    where
        T: Clone,
    {
        let range = clamp_range(range, self.len());
        self.range(range).cloned().collect()
    }
}

impl<T> ArrayLike for Sparse<T> {
    type Item = T;
    type Owned = Sparse<T>;

    fn length(&self) -> usize {
        self.len()
    }

    fn slot(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn slice(&self, range: Range<usize>) -> Sparse<T>
    where
        T: Clone,
    {
        Sparse::from(self.slots()[clamp_range(range, self.len())].to_vec())
    }
}
