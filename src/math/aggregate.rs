use crate::array::ArrayLike;
use crate::error::{ErrCode, ErrorResult};
use crate::number::clamp_finite;

/// Sums the elements of `numbers`, starting from 0. The running total is clamped after every
/// addition.
///
/// # Errors
/// - [`ErrCode::NaN`] if an element is NaN. The message names its index.
/// - [`ErrCode::Unknown`] if the running total becomes NaN.
pub fn sum<A>(numbers: &A) -> Result<f64, ErrorResult>
where
    A: ArrayLike<Item = f64> + ?Sized,
    A::Owned: 'static,
{
    let total = fold(numbers, Some(0.0), |total, n| total + n)?;
    Ok(total.unwrap_or(0.0))
}

/// Multiplies the elements of `numbers`, starting from 1. The running total is clamped after
/// every multiplication, so `product` of nothing is 1.
///
/// # Errors
/// - [`ErrCode::NaN`] if an element is NaN. The message names its index.
/// - [`ErrCode::Unknown`] if the running total becomes NaN, such as when zero meets an infinity.
pub fn product<A>(numbers: &A) -> Result<f64, ErrorResult>
where
    A: ArrayLike<Item = f64> + ?Sized,
    A::Owned: 'static,
{
    let total = fold(numbers, Some(1.0), |total, n| total * n)?;
    Ok(total.unwrap_or(1.0))
}

/// Multiplies the elements of `numbers` together. Unlike [`product`], the first element is used as
/// is and `multiply` of nothing is 0.
///
/// # Errors
/// - [`ErrCode::NaN`] if an element is NaN. The message names its index.
/// - [`ErrCode::Unknown`] if the running total becomes NaN.
pub fn multiply<A>(numbers: &A) -> Result<f64, ErrorResult>
where
    A: ArrayLike<Item = f64> + ?Sized,
    A::Owned: 'static,
{
    let total = fold(numbers, None, |total, n| total * n)?;
    Ok(total.unwrap_or(0.0))
}

/// Returns the arithmetic mean of the elements of `numbers`. Empty slots don't count towards the
/// number of values, and the mean of nothing is 0.
///
/// # Errors
/// - [`ErrCode::NaN`] if an element is NaN. The message names its index.
/// - [`ErrCode::Unknown`] if the running total becomes NaN.
///
/// # Examples
/// ```
/// # use mjd_utils::array::Sparse;
/// # use mjd_utils::math::mean;
/// let numbers: Sparse<f64> = vec![Some(1.0), None, Some(2.0), Some(6.0)].into();
/// assert_eq!(mean(&numbers).ok(), Some(3.0));
/// ```
pub fn mean<A>(numbers: &A) -> Result<f64, ErrorResult>
where
    A: ArrayLike<Item = f64> + ?Sized,
    A::Owned: 'static,
{
    let count = (0..numbers.length()).filter(|&i| numbers.has(i)).count();

    match fold(numbers, None, |total, n| total + n)? {
        Some(total) => clamp_finite(total / count as f64),
        None => Ok(0.0),
    }
}

/// Folds the present elements of `numbers` with `op`, clamping the total after every step. With
/// no `initial` total, the first element starts the fold unclamped. Returns [`None`] if there was
/// nothing to fold.
fn fold<A, F>(numbers: &A, initial: Option<f64>, mut op: F) -> Result<Option<f64>, ErrorResult>
where
    A: ArrayLike<Item = f64> + ?Sized,
    A::Owned: 'static,
    F: FnMut(f64, f64) -> f64,
{
    let mut total = initial;

    for index in 0..numbers.length() {
        let Some(&n) = numbers.slot(index) else {
            continue;
        };

        if n.is_nan() {
            return Err(ErrorResult::error(
                ErrCode::NaN,
                format!("The element at index {index} was NaN. Execution stopped."),
            )
            .with_arguments((numbers.to_owned_array(),)));
        }

        total = match total {
            None => Some(n),
            Some(current) => {
                let next = clamp_finite(op(current, n)).map_err(|err| {
                    ErrorResult::error(
                        ErrCode::Unknown,
                        "An unknown error has occurred. Execution stopped.",
                    )
                    .with_previous(err)
                    .with_arguments((numbers.to_owned_array(),))
                })?;
                Some(next)
            }
        };
    }

    Ok(total)
}
