use crate::error::{ErrCode, ErrorResult};
use crate::number::clamp_finite;

/// Adds `addend` to `augend`. The result isn't clamped, so it may be infinite.
///
/// # Errors
/// [`ErrCode::NaN`] if either argument is NaN.
pub fn add(augend: f64, addend: f64) -> Result<f64, ErrorResult> {
    if augend.is_nan() || addend.is_nan() {
        return Err(ErrorResult::error(
            ErrCode::NaN,
            format!(
                "Both augend and addend arguments must not be NaN. Args: augend {augend}, addend {addend}"
            ),
        )
        .with_arguments((augend, addend)));
    }

    Ok(augend + addend)
}

/// Subtracts `subtrahend` from `minuend`. Both arguments and the result are clamped to the finite
/// range of [`f64`].
///
/// # Errors
/// [`ErrCode::NaN`] if either argument is NaN.
pub fn subtract(minuend: f64, subtrahend: f64) -> Result<f64, ErrorResult> {
    if minuend.is_nan() || subtrahend.is_nan() {
        return Err(ErrorResult::range_error(
            ErrCode::NaN,
            format!(
                "Arguments minuend and subtrahend cannot be NaN. Args: minuend was {minuend}, subtrahend was {subtrahend}"
            ),
        )
        .with_arguments((minuend, subtrahend)));
    }

    clamped(minuend, subtrahend, |a, b| a - b)
}

/// Divides `dividend` by `divisor`. Both arguments and the result are clamped to the finite range
/// of [`f64`].
///
/// # Errors
/// - [`ErrCode::NaN`] if either argument is NaN.
/// - [`ErrCode::ZeroDivision`] if `divisor` is zero, of either sign.
pub fn divide(dividend: f64, divisor: f64) -> Result<f64, ErrorResult> {
    if dividend.is_nan() || divisor.is_nan() {
        return Err(ErrorResult::range_error(
            ErrCode::NaN,
            format!(
                "Arguments dividend and divisor cannot be NaN. Args: dividend was {dividend}, divisor was {divisor}"
            ),
        )
        .with_arguments((dividend, divisor)));
    }

    if divisor == 0.0 {
        return Err(ErrorResult::range_error(
            ErrCode::ZeroDivision,
            format!("Cannot divide by 0. Args: dividend was {dividend}, divisor was {divisor}"),
        )
        .with_arguments((dividend, divisor)));
    }

    clamped(dividend, divisor, |a, b| a / b)
}

fn clamped(a: f64, b: f64, op: impl FnOnce(f64, f64) -> f64) -> Result<f64, ErrorResult> {
    let unknown = |err: ErrorResult| {
        ErrorResult::error(ErrCode::Unknown, "An unknown error has occurred.")
            .with_previous(err)
            .with_arguments((a, b))
    };

    let clamped_a = clamp_finite(a).map_err(unknown)?;
    let clamped_b = clamp_finite(b).map_err(unknown)?;
    clamp_finite(op(clamped_a, clamped_b)).map_err(unknown)
}
