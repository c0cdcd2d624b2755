//! Runtime type predicates and value classification.
//!
//! The predicates take any `'static` value as [`&dyn Any`](std::any::Any), return a plain `bool`
//! and never panic. Most of the time the type system makes these checks unnecessary; they exist
//! for code that handles values whose concrete type is only known at runtime, such as
//! [`convert_string_bool`](crate::convert::convert_string_bool).
//!
//! Array-likeness is a compile time property here, expressed by the
//! [`ArrayLike`](crate::array::ArrayLike) trait rather than a predicate.

mod noop;
mod predicates;
mod symbol;
mod truthy;

pub use noop::*;
pub use predicates::*;
pub use symbol::*;
pub use truthy::*;
