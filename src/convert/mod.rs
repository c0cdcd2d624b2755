//! Conversions between loosely typed values.

mod string_bool;

pub use string_bool::*;
