use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};

use tracing::{debug, trace};

use super::{IntoIter, Iter};
use crate::clone::DeepClone;
use crate::error::{ErrCode, ErrorResult};

/// The backing storage shared by every container in this module. Each container owns exactly one
/// Sequence and only exposes the operations that its ordering discipline allows.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Sequence<T> {
    elements: VecDeque<T>,
}

impl<T> Sequence<T> {
    pub const fn new() -> Sequence<T> {
        Sequence {
            elements: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push_front(&mut self, value: T) {
        self.elements.push_front(value);
    }

    pub fn push_back(&mut self, value: T) {
        self.elements.push_back(value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.elements.pop_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.elements.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.elements.back()
    }

    /// Drops every element, leaving the allocation in place.
    pub fn clear(&mut self, container: &'static str) {
        let dropped = self.elements.len();
        self.elements.clear();
        trace!(container, dropped, "cleared container");
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements.iter(),
        }
    }
}

impl<T: Clone> Sequence<T> {
    pub fn to_vec_shallow(&self) -> Vec<T> {
        self.elements.iter().cloned().collect()
    }
}

impl<T: DeepClone> Sequence<T> {
    /// Deep clones every element in order, stopping at the first element that can't be cloned.
    pub fn to_vec_deep(&self, container: &'static str) -> Result<Vec<T>, ErrorResult> {
        self.elements
            .iter()
            .map(DeepClone::deep_clone)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|err| {
                debug!(container, %err, "deep copy of container elements failed");

                ErrorResult::error(
                    ErrCode::DeepCopyFailed,
                    format!("Deep copying {container} elements failed."),
                )
                .with_previous(err)
                .with_arguments(())
            })
    }
}

impl<T: Display> Sequence<T> {
    /// Writes every element with its [`Display`] implementation, separated by commas.
    pub fn fmt_joined(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            Display::fmt(element, f)?;
        }
        Ok(())
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.elements.into_iter(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}
