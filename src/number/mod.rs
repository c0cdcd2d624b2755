//! Validated numeric helpers: clamping, safe integer checks and random integers.
//!
//! "Safe" integers are the integers an [`f64`] can represent exactly along with all of their
//! neighbours, which are those within `±(2^53 - 1)`.

mod clamp;
mod random;

pub use clamp::*;
pub use random::*;

/// The largest integer `n` such that `n` and `n + 1` are both exactly representable as an [`f64`].
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The smallest integer `n` such that `n` and `n - 1` are both exactly representable as an [`f64`].
pub const MIN_SAFE_INTEGER: f64 = -9_007_199_254_740_991.0;

/// Returns true if `n` is an integer within the safe range.
pub fn is_safe_integer(n: f64) -> bool {
    n.is_finite() && n.trunc() == n && n.abs() <= MAX_SAFE_INTEGER
}

/// Converts `n` to a count if it is a safe, non-negative integer.
pub(crate) fn to_count(n: f64) -> Option<usize> {
    (is_safe_integer(n) && n >= 0.0).then_some(n as usize)
}
