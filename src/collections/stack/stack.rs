use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};

use crate::clone::DeepClone;
use crate::collections::sequence::Sequence;
use crate::collections::{IntoIter, Iter};
use crate::error::ErrorResult;

/// A last-in first-out stack. Elements are added to and removed from the top, so the most recently
/// added element is always the next to be removed.
///
/// Reading from an empty Stack returns [`None`] rather than an error.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Stack.
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
/// \* Amortized.
///
/// # Examples
/// ```
/// # use mjd_utils::collections::Stack;
/// let mut stack = Stack::new();
/// stack.add('a');
/// stack.add('b');
///
/// assert_eq!(stack.peek(), Some(&'b'));
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.remove(), Some('b'));
/// assert_eq!(stack.remove(), Some('a'));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) inner: Sequence<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new() -> Stack<T> {
        Stack {
            inner: Sequence::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `element` to the top of the Stack.
    pub fn add(&mut self, element: T) {
        self.inner.push_back(element);
    }

    /// Removes the element on top of the Stack and returns it, if the Stack isn't empty.
    pub fn remove(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    /// Returns a reference to the element on top of the Stack, if the Stack isn't empty.
    pub fn peek(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Removes and drops every element in the Stack.
    pub fn clear(&mut self) {
        self.inner.clear("stack");
    }

    /// Returns an iterator over the elements of the Stack, from bottom to top. This is the reverse
    /// of the order they would be removed in.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Clone> Stack<T> {
    /// Copies the elements of the Stack into a [`Vec`], from bottom to top. Elements are cloned
    /// with [`Clone`], so shared pointers stay shared.
    pub fn to_array_shallow(&self) -> Vec<T> {
        self.inner.to_vec_shallow()
    }
}

impl<T: DeepClone> Stack<T> {
    /// Deep clones the elements of the Stack into a [`Vec`], from bottom to top.
    ///
    /// # Errors
    /// [`ErrCode::DeepCopyFailed`](crate::error::ErrCode::DeepCopyFailed) if any element can't be
    /// deep cloned.
    pub fn to_array_deep(&self) -> Result<Vec<T>, ErrorResult> {
        self.inner.to_vec_deep("stack")
    }
}

impl<T: 'static> Stack<T> {
    /// Returns true if `value` is a Stack with elements of type `T`.
    pub fn is_stack(value: &dyn Any) -> bool {
        value.is::<Stack<T>>()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Creates a Stack by adding each element of `iter` in order, so the last element yielded is
    /// on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("elements", &self.inner)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Stack<T> {
    /// Writes the elements from bottom to top, separated by commas.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.inner.fmt_joined(f)
    }
}
