//! A last-in first-out stack.

mod stack;
mod tests;

pub use stack::*;
