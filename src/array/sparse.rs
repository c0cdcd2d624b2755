use std::fmt::{self, Debug, Formatter};

/// A collection where any slot may be empty. Empty slots count towards the length but hold no
/// element, which is distinct from holding a value that represents "nothing".
///
/// # Examples
/// ```
/// # use mjd_utils::array::Sparse;
/// let mut sparse = Sparse::with_len(3);
/// sparse.set(1, "b");
/// sparse.push("d");
///
/// assert_eq!(sparse.len(), 4);
/// assert_eq!(sparse.get(0), None);
/// assert_eq!(sparse.get(1), Some(&"b"));
/// assert!(sparse.is_hole(2));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sparse<T> {
    slots: Vec<Option<T>>,
}

impl<T> Sparse<T> {
    /// Creates a new Sparse collection with no slots.
    pub const fn new() -> Sparse<T> {
        Sparse { slots: Vec::new() }
    }

    /// Creates a new Sparse collection with `len` empty slots.
    pub fn with_len(len: usize) -> Sparse<T> {
        Sparse {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Creates a new Sparse collection without any empty slots.
    pub fn from_dense(values: impl IntoIterator<Item = T>) -> Sparse<T> {
        values.into_iter().map(Some).collect()
    }

    /// Returns the number of slots, empty or not.
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the element at `index` if the slot exists and isn't empty.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Returns true if `index` is in bounds and the slot there is empty.
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Stores `value` at `index`, growing the collection with empty slots if required. Returns the
    /// element previously in the slot.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(value)
    }

    /// Empties the slot at `index`, returning its element. The length is unchanged.
    pub fn delete(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index)?.take()
    }

    /// Appends an element in a new slot.
    pub fn push(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    /// Appends an empty slot.
    pub fn push_hole(&mut self) {
        self.slots.push(None);
    }

    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots
    }

    /// Returns an iterator over the present elements, skipping empty slots.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }
}

impl<T> Default for Sparse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Option<T>>> for Sparse<T> {
    fn from(slots: Vec<Option<T>>) -> Self {
        Sparse { slots }
    }
}

impl<T> FromIterator<Option<T>> for Sparse<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Sparse {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Sparse<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Hole;

        impl Debug for Hole {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "<empty>")
            }
        }

        let mut list = f.debug_list();
        for slot in &self.slots {
            match slot {
                Some(value) => list.entry(value),
                None => list.entry(&Hole),
            };
        }
        list.finish()
    }
}
