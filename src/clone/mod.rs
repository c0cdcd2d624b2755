//! Fallible recursive copying.
//!
//! [`Clone`] doesn't promise a deep copy: cloning an [`Rc`](std::rc::Rc) only bumps a reference
//! count. The [`DeepClone`] trait is implemented for the types that can be fully duplicated and
//! fails with a [`DataCloneError`] for those that can't, such as a
//! [`Symbol`](crate::language::Symbol), whose identity is unforgeable.

mod deep_clone;
mod tests;

pub use deep_clone::*;
