use rand::Rng;

use super::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use crate::error::{ErrCode, ErrorResult};

/// Generates a random integer within `min..=max` using the thread-local generator. See
/// [`random_int_with`] for the rules applied to the bounds.
///
/// Not suitable for security purposes.
pub fn random_int(min: f64, max: f64) -> Result<i64, ErrorResult> {
    random_int_with(&mut rand::thread_rng(), min, max)
}

/// Generates a random integer within `min..=max` using the provided generator.
///
/// The ceiling of `min` and the floor of `max` are used, so fractional bounds are allowed. Bounds
/// are clamped to the safe integer range, but `min` and `max` are never swapped.
///
/// # Errors
/// - [`ErrCode::NaN`] if either bound is NaN.
/// - [`ErrCode::InvalidRange`] if `min` is at or above [`MAX_SAFE_INTEGER`], `max` is at or below
///   [`MIN_SAFE_INTEGER`], the bounds are equal, or `min` is greater than `max`.
///
/// # Examples
/// ```
/// # use rand::SeedableRng;
/// # use mjd_utils::number::random_int_with;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let value = random_int_with(&mut rng, 0.5, 3.9).unwrap();
/// assert!((1..=3).contains(&value));
/// ```
pub fn random_int_with<R: Rng>(rng: &mut R, min: f64, max: f64) -> Result<i64, ErrorResult> {
    let mut min_ceil = min.ceil();
    let mut max_floor = max.floor();

    if min_ceil.is_nan() || max_floor.is_nan() {
        return Err(ErrorResult::type_error(
            ErrCode::NaN,
            format!("Both min and max must be numbers. Args: min was {min}, max was {max}"),
        )
        .with_arguments((min, max)));
    }

    if min_ceil >= MAX_SAFE_INTEGER || max_floor <= MIN_SAFE_INTEGER {
        return Err(ErrorResult::range_error(
            ErrCode::InvalidRange,
            format!(
                "Value for min must be less than MAX_SAFE_INTEGER and value for max must be greater than MIN_SAFE_INTEGER. Args: min was {min}, max was {max}"
            ),
        )
        .with_arguments((min, max)));
    }

    min_ceil = min_ceil.max(MIN_SAFE_INTEGER);
    max_floor = max_floor.min(MAX_SAFE_INTEGER);

    if min_ceil == max_floor {
        return Err(ErrorResult::range_error(
            ErrCode::InvalidRange,
            format!("Values for min and max cannot be equal. Args: min was {min}, max was {max}"),
        )
        .with_arguments((min, max)));
    }

    if min_ceil > max_floor {
        return Err(ErrorResult::range_error(
            ErrCode::InvalidRange,
            format!("Value of max must be greater than min. Args: min was {min}, max was {max}"),
        )
        .with_arguments((min, max)));
    }

    // Both bounds are safe integers at this point, so the casts are exact.
    Ok(rng.gen_range(min_ceil as i64..=max_floor as i64))
}
