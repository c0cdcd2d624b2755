use crate::error::{ErrCode, ErrorResult};

/// Clamps `n` within the inclusive range `lower..=upper`.
///
/// Returns an [`ErrCode::NaN`] error if any argument is NaN, and an [`ErrCode::InvalidRange`]
/// error if `lower` is greater than `upper`. NaN is checked first.
///
/// # Examples
/// ```
/// # use mjd_utils::number::clamp;
/// assert_eq!(clamp(12.0, 0.0, 10.0).ok(), Some(10.0));
/// assert_eq!(clamp(-3.0, 0.0, 10.0).ok(), Some(0.0));
/// assert!(clamp(5.0, 10.0, 0.0).is_err());
/// ```
pub fn clamp(n: f64, lower: f64, upper: f64) -> Result<f64, ErrorResult> {
    if n.is_nan() || lower.is_nan() || upper.is_nan() {
        return Err(ErrorResult::error(
            ErrCode::NaN,
            format!(
                "Arguments n, lower, and upper must not be NaN. Args: n was {n}, lower was {lower}, upper was {upper}"
            ),
        )
        .with_arguments((n, lower, upper)));
    }

    if lower > upper {
        return Err(ErrorResult::range_error(
            ErrCode::InvalidRange,
            format!(
                "Argument upper must be greater than or equal to lower. Args: n was {n}, lower was {lower}, upper was {upper}"
            ),
        )
        .with_arguments((n, lower, upper)));
    }

    Ok(n.max(lower).min(upper))
}

/// Clamps `n` to the finite range of [`f64`]. Fails only if `n` is NaN.
pub(crate) fn clamp_finite(n: f64) -> Result<f64, ErrorResult> {
    clamp(n, -f64::MAX, f64::MAX)
}
