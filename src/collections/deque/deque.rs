use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};

use crate::clone::DeepClone;
use crate::collections::sequence::Sequence;
use crate::collections::{IntoIter, Iter};
use crate::error::ErrorResult;

/// A double-ended queue, which allows elements to be added and removed at either end. Adding at
/// one end and removing from the other behaves like a [`Queue`](super::Queue), while using a
/// single end behaves like a [`Stack`](super::Stack).
///
/// A Deque has no fixed capacity. It is bounded only by available memory and the number of
/// elements that can be addressed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Deque.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add_first/last` | `O(1)`* |
/// | `remove_first/last` | `O(1)` |
/// | `peek_first/last` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `to_array_shallow/deep` | `O(n)` |
///
/// \* Amortized.
///
/// # Examples
/// ```
/// # use mjd_utils::collections::Deque;
/// let mut deque = Deque::new();
/// deque.add_last('x');
/// deque.add_first('y');
///
/// assert_eq!(deque.to_string(), "y,x");
/// assert_eq!(deque.remove_last(), Some('x'));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Deque<T> {
    pub(crate) inner: Sequence<T>,
}

impl<T> Deque<T> {
    /// Creates a new Deque with no elements.
    pub const fn new() -> Deque<T> {
        Deque {
            inner: Sequence::new(),
        }
    }

    /// Returns the number of elements in the Deque.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Deque contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `element` to the front of the Deque.
    pub fn add_first(&mut self, element: T) {
        self.inner.push_front(element);
    }

    /// Adds `element` to the back of the Deque.
    pub fn add_last(&mut self, element: T) {
        self.inner.push_back(element);
    }

    /// Removes the first element and returns it, if the Deque isn't empty.
    pub fn remove_first(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Removes the last element and returns it, if the Deque isn't empty.
    pub fn remove_last(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    /// Returns a reference to the first element, if the Deque isn't empty.
    pub fn peek_first(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Returns a reference to the last element, if the Deque isn't empty.
    pub fn peek_last(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Removes and drops every element in the Deque.
    pub fn clear(&mut self) {
        self.inner.clear("deque");
    }

    /// Returns an iterator over the elements of the Deque, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Clone> Deque<T> {
    /// Copies the elements of the Deque into a [`Vec`], from front to back. Elements are cloned
    /// with [`Clone`], so shared pointers stay shared.
    pub fn to_array_shallow(&self) -> Vec<T> {
        self.inner.to_vec_shallow()
    }
}

impl<T: DeepClone> Deque<T> {
    /// Deep clones the elements of the Deque into a [`Vec`], from front to back.
    ///
    /// # Errors
    /// [`ErrCode::DeepCopyFailed`](crate::error::ErrCode::DeepCopyFailed) if any element can't be
    /// deep cloned.
    pub fn to_array_deep(&self) -> Result<Vec<T>, ErrorResult> {
        self.inner.to_vec_deep("deque")
    }
}

impl<T: 'static> Deque<T> {
    /// Returns true if `value` is a Deque with elements of type `T`.
    pub fn is_deque(value: &dyn Any) -> bool {
        value.is::<Deque<T>>()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    /// Adds each element of `iter` to the back of the Deque.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("elements", &self.inner)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Deque<T> {
    /// Writes the elements from front to back, separated by commas.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.inner.fmt_joined(f)
    }
}
