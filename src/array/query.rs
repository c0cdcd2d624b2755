use rand::Rng;

use super::ArrayLike;
use crate::error::{ErrCode, ErrorResult};
use crate::number::{random_int_with, to_count};

/// Returns the first element of `arr`.
///
/// # Errors
/// - [`ErrCode::EmptyCollection`] if `arr` has no slots.
/// - [`ErrCode::EmptySlot`] if the first slot is empty.
pub fn first<A>(arr: &A) -> Result<&A::Item, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    non_empty(arr, || (arr.to_owned_array(),))?;

    arr.slot(0).ok_or_else(|| {
        ErrorResult::error(
            ErrCode::EmptySlot,
            "The first element in arr was an empty slot.",
        )
        .with_arguments((arr.to_owned_array(),))
    })
}

/// Returns the last element of `arr`.
///
/// # Errors
/// - [`ErrCode::EmptyCollection`] if `arr` has no slots.
/// - [`ErrCode::EmptySlot`] if the last slot is empty.
pub fn last<A>(arr: &A) -> Result<&A::Item, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    non_empty(arr, || (arr.to_owned_array(),))?;

    arr.slot(arr.length() - 1).ok_or_else(|| {
        ErrorResult::error(
            ErrCode::EmptySlot,
            "The last element in arr was an empty slot.",
        )
        .with_arguments((arr.to_owned_array(),))
    })
}

/// Returns the element at `index` in `arr`.
///
/// # Errors
/// - [`ErrCode::EmptyCollection`] if `arr` has no slots.
/// - [`ErrCode::EmptySlot`] if `index` doesn't name an occupied slot. This includes empty slots as
///   well as indices that are out of bounds, negative or fractional.
///
/// # Examples
/// ```
/// # use mjd_utils::array::{nth, Sparse};
/// assert_eq!(nth(&['a', 'b', 'c'], 1.0).ok(), Some(&'b'));
///
/// let sparse: Sparse<char> = vec![Some('a'), None].into();
/// assert!(nth(&sparse, 1.0).is_err());
/// assert!(nth(&sparse, 7.0).is_err());
/// ```
pub fn nth<A>(arr: &A, index: f64) -> Result<&A::Item, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    non_empty(arr, || (arr.to_owned_array(), index))?;

    let slot = to_count(index).and_then(|i| arr.slot(i));
    slot.ok_or_else(|| {
        ErrorResult::error(
            ErrCode::EmptySlot,
            format!("The element at index {index} in arr was an empty slot."),
        )
        .with_arguments((arr.to_owned_array(), index))
    })
}

/// Returns a randomly selected element of `arr` using the thread-local generator.
///
/// # Errors
/// See [`sample_with`].
pub fn sample<A>(arr: &A) -> Result<&A::Item, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    sample_with(&mut rand::thread_rng(), arr)
}

/// Returns a randomly selected element of `arr` using the provided generator.
///
/// # Errors
/// - [`ErrCode::EmptyCollection`] if `arr` has no slots.
/// - [`ErrCode::Unknown`] if a random index couldn't be generated. The cause holds the error from
///   [`random_int_with`](crate::number::random_int_with).
/// - [`ErrCode::EmptySlot`] if the sampled slot is empty.
pub fn sample_with<'a, A, R>(rng: &mut R, arr: &'a A) -> Result<&'a A::Item, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
    R: Rng,
{
    non_empty(arr, || (arr.to_owned_array(),))?;

    let len = arr.length();
    let index = if len == 1 {
        0
    } else {
        let generated = random_int_with(rng, 0.0, (len - 1) as f64).map_err(|err| {
            ErrorResult::error(
                ErrCode::Unknown,
                "Could not generate a random index in arr.",
            )
            .with_previous(err)
            .with_arguments((arr.to_owned_array(),))
        })?;
        // The generated index lies within 0..len.
        generated as usize
    };

    arr.slot(index).ok_or_else(|| {
        ErrorResult::error(
            ErrCode::EmptySlot,
            "The sampled element in arr was an empty slot.",
        )
        .with_arguments((arr.to_owned_array(),))
    })
}

fn non_empty<A, Args, F>(arr: &A, arguments: F) -> Result<(), ErrorResult>
where
    A: ArrayLike + ?Sized,
    Args: 'static,
    F: FnOnce() -> Args,
{
    if arr.length() == 0 {
        Err(ErrorResult::error(
            ErrCode::EmptyCollection,
            "Argument arr contains no elements.",
        )
        .with_arguments(arguments()))
    } else {
        Ok(())
    }
}
