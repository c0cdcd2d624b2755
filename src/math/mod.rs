//! Arithmetic with NaN checks and saturating results.
//!
//! Apart from [`add`], results are clamped to the finite range of [`f64`], so an overflow produces
//! [`f64::MAX`] or its negation rather than an infinity. The aggregate functions accept any
//! [`ArrayLike`](crate::array::ArrayLike) collection of [`f64`]s and skip its empty slots.
//!
//! # Examples
//! ```
//! # use mjd_utils::math::{divide, sum};
//! assert_eq!(sum(&[1.5, 2.5, f64::MAX, f64::MAX]).ok(), Some(f64::MAX));
//! assert_eq!(divide(f64::MAX, 0.5).ok(), Some(f64::MAX));
//! assert!(divide(1.0, 0.0).is_err());
//! ```

mod aggregate;
mod arithmetic;
mod tests;

pub use aggregate::*;
pub use arithmetic::*;
