//! A first-in first-out queue.

mod queue;
mod tests;

pub use queue::*;
