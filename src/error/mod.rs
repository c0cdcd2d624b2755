//! The error convention shared by every fallible operation in this crate.
//!
//! Nothing here panics for an expected failure. Instead, operations return
//! `Result<T, `[`ErrorResult`]`>`, where the error carries a closed-set [`ErrCode`], the
//! [`ErrorName`] family it belongs to, a message, and an [`ErrorCause`] holding the wrapped
//! [`PreviousError`] (if any) and the exact [`Arguments`] the failing call received.
//!
//! Tests (and callers doing diagnostics) can recover the argument tuple by downcasting it back to
//! its original type:
//! ```
//! # use mjd_utils::error::{ErrCode, ErrorName, ErrorResult};
//! let err = ErrorResult::range_error(ErrCode::InvalidRange, "n must not be negative.")
//!     .with_arguments((vec![1, 2, 3], -1.0_f64));
//!
//! assert_eq!(err.kind(), ErrCode::InvalidRange);
//! assert_eq!(err.name(), ErrorName::RangeError);
//! assert_eq!(err.arguments::<(Vec<i32>, f64)>(), Some(&(vec![1, 2, 3], -1.0)));
//! ```

mod code;
mod error_result;
mod tests;

pub use code::*;
pub use error_result::*;
