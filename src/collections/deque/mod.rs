//! A double-ended queue.

mod deque;

pub use deque::*;
