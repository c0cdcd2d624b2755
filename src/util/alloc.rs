use std::cell::Cell;
use std::rc::Rc;

/// Hands out [`CountedDrop`] tokens and counts how many of them have been dropped.
#[derive(Debug, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn token(&self) -> CountedDrop {
        CountedDrop(Rc::clone(&self.0))
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// Increments its [`DropCounter`] when dropped.
#[derive(Debug)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
