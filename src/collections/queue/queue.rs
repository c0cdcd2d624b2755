use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};

use crate::clone::DeepClone;
use crate::collections::sequence::Sequence;
use crate::collections::{IntoIter, Iter};
use crate::error::ErrorResult;

/// A first-in first-out queue. Elements are added at the tail and removed from the head, in
/// exactly the order they were added.
///
/// Reading from an empty Queue returns [`None`] rather than an error. Because `T` may itself be an
/// [`Option`], check [`is_empty`](Queue::is_empty) first if that distinction matters.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `remove` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `to_array_shallow/deep` | `O(n)` |
///
/// \* Amortized, the backing buffer occasionally has to grow.
///
/// # Examples
/// ```
/// # use mjd_utils::collections::Queue;
/// let mut queue = Queue::new();
/// queue.add(1);
/// queue.add(2);
///
/// assert_eq!(queue.remove(), Some(1));
/// assert_eq!(queue.remove(), Some(2));
/// assert_eq!(queue.remove(), None);
/// assert_eq!(queue.len(), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) inner: Sequence<T>,
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub const fn new() -> Queue<T> {
        Queue {
            inner: Sequence::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `element` to the tail of the Queue.
    pub fn add(&mut self, element: T) {
        self.inner.push_back(element);
    }

    /// Removes the element at the head of the Queue and returns it, if the Queue isn't empty.
    pub fn remove(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Returns a reference to the element at the head of the Queue, if the Queue isn't empty.
    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Removes and drops every element in the Queue.
    pub fn clear(&mut self) {
        self.inner.clear("queue");
    }

    /// Returns an iterator over the elements of the Queue, from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Clone> Queue<T> {
    /// Copies the elements of the Queue into a [`Vec`], from head to tail. Each element is cloned
    /// with [`Clone`], so elements behind an [`Rc`](std::rc::Rc) are shared with the Queue rather
    /// than duplicated.
    pub fn to_array_shallow(&self) -> Vec<T> {
        self.inner.to_vec_shallow()
    }
}

impl<T: DeepClone> Queue<T> {
    /// Deep clones the elements of the Queue into a [`Vec`], from head to tail. No part of the
    /// result is shared with the Queue.
    ///
    /// # Errors
    /// [`ErrCode::DeepCopyFailed`](crate::error::ErrCode::DeepCopyFailed) if any element can't be
    /// deep cloned. The [`DataCloneError`](crate::clone::DataCloneError) is kept as the previous
    /// error.
    pub fn to_array_deep(&self) -> Result<Vec<T>, ErrorResult> {
        self.inner.to_vec_deep("queue")
    }
}

impl<T: 'static> Queue<T> {
    /// Returns true if `value` is a Queue with elements of type `T`.
    ///
    /// # Examples
    /// ```
    /// # use mjd_utils::collections::{Queue, Stack};
    /// assert!(Queue::<i32>::is_queue(&Queue::<i32>::new()));
    /// assert!(!Queue::<i32>::is_queue(&Stack::<i32>::new()));
    /// assert!(!Queue::<i32>::is_queue(&vec![1, 2]));
    /// ```
    pub fn is_queue(value: &dyn Any) -> bool {
        value.is::<Queue<T>>()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Creates a Queue by adding each element of `iter` in order, so the first element yielded is
    /// at the head.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("elements", &self.inner)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Queue<T> {
    /// Writes the elements from head to tail, separated by commas.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.inner.fmt_joined(f)
    }
}
