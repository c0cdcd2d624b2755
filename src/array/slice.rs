use super::ArrayLike;
use crate::error::{ErrCode, ErrorResult};
use crate::number::{is_safe_integer, to_count};

/// Splits `arr` into chunks of `size` slots. The last chunk is short if the length isn't a
/// multiple of `size`, and an empty `arr` produces no chunks.
///
/// # Errors
/// [`ErrCode::InvalidRange`] unless `size` is a safe integer greater than 0.
///
/// # Examples
/// ```
/// # use mjd_utils::array::chunk;
/// let chunks = chunk(&[1, 2, 3, 4, 5], 2.0).unwrap();
/// assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunk<A>(arr: &A, size: f64) -> Result<Vec<A::Owned>, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    if !is_safe_integer(size) || size <= 0.0 {
        return Err(ErrorResult::range_error(
            ErrCode::InvalidRange,
            "Argument size must be an integer greater than 0.",
        )
        .with_arguments((arr.to_owned_array(), size)));
    }

    let size = size as usize;
    let len = arr.length();

    Ok((0..len)
        .step_by(size)
        .map(|start| arr.slice(start..start.saturating_add(size)))
        .collect())
}

/// Returns everything except the first `n` slots of `arr`.
///
/// # Errors
/// [`ErrCode::InvalidRange`] unless `n` is a safe integer greater than or equal to 0.
pub fn drop<A>(arr: &A, n: f64) -> Result<A::Owned, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    let count = count_or_err(arr, n)?;
    Ok(arr.slice(count..arr.length()))
}

/// Returns everything except the last `n` slots of `arr`.
///
/// # Errors
/// [`ErrCode::InvalidRange`] unless `n` is a safe integer greater than or equal to 0.
pub fn drop_right<A>(arr: &A, n: f64) -> Result<A::Owned, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    let count = count_or_err(arr, n)?;
    Ok(arr.slice(0..arr.length().saturating_sub(count)))
}

/// Returns the first `n` slots of `arr`, or all of them if there are fewer than `n`.
///
/// # Errors
/// [`ErrCode::InvalidRange`] unless `n` is a safe integer greater than or equal to 0.
pub fn take<A>(arr: &A, n: f64) -> Result<A::Owned, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    let count = count_or_err(arr, n)?;
    Ok(arr.slice(0..count))
}

/// Returns the last `n` slots of `arr`, or all of them if there are fewer than `n`.
///
/// # Errors
/// [`ErrCode::InvalidRange`] unless `n` is a safe integer greater than or equal to 0.
pub fn take_right<A>(arr: &A, n: f64) -> Result<A::Owned, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    let count = count_or_err(arr, n)?;
    let len = arr.length();
    Ok(arr.slice(len.saturating_sub(count)..len))
}

/// Returns everything except the first slot of `arr`.
pub fn tail<A>(arr: &A) -> A::Owned
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
{
    arr.slice(1..arr.length())
}

/// Drops elements from the start of `arr` while `predicate` returns true, returning the rest.
///
/// The predicate receives each element and its index. Empty slots never satisfy the predicate.
pub fn drop_while<A, F>(arr: &A, predicate: F) -> A::Owned
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    F: FnMut(&A::Item, usize) -> bool,
{
    let len = arr.length();
    match first_mismatch(arr, predicate) {
        Some(index) => arr.slice(index..len),
        None => arr.slice(len..len),
    }
}

/// Drops elements from the end of `arr` while `predicate` returns true, returning the rest.
///
/// The predicate receives each element and its index. Empty slots never satisfy the predicate.
pub fn drop_right_while<A, F>(arr: &A, predicate: F) -> A::Owned
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    F: FnMut(&A::Item, usize) -> bool,
{
    match last_mismatch(arr, predicate) {
        Some(index) => arr.slice(0..index + 1),
        None => arr.slice(0..0),
    }
}

/// Takes elements from the start of `arr` while `predicate` returns true.
///
/// The predicate receives each element and its index. Empty slots never satisfy the predicate.
pub fn take_while<A, F>(arr: &A, predicate: F) -> A::Owned
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    F: FnMut(&A::Item, usize) -> bool,
{
    let len = arr.length();
    match first_mismatch(arr, predicate) {
        Some(index) => arr.slice(0..index),
        None => arr.slice(0..len),
    }
}

/// Takes elements from the end of `arr` while `predicate` returns true. The taken elements keep
/// their original order.
///
/// The predicate receives each element and its index. Empty slots never satisfy the predicate.
pub fn take_right_while<A, F>(arr: &A, predicate: F) -> A::Owned
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    F: FnMut(&A::Item, usize) -> bool,
{
    let len = arr.length();
    match last_mismatch(arr, predicate) {
        Some(index) => arr.slice(index + 1..len),
        None => arr.slice(0..len),
    }
}

fn count_or_err<A>(arr: &A, n: f64) -> Result<usize, ErrorResult>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    A::Owned: 'static,
{
    to_count(n).ok_or_else(|| {
        ErrorResult::range_error(
            ErrCode::InvalidRange,
            "Argument n must be an integer equal to or greater than 0.",
        )
        .with_arguments((arr.to_owned_array(), n))
    })
}

fn satisfies<A, F>(arr: &A, predicate: &mut F, index: usize) -> bool
where
    A: ArrayLike + ?Sized,
    F: FnMut(&A::Item, usize) -> bool,
{
    match arr.slot(index) {
        Some(element) => predicate(element, index),
        None => false,
    }
}

fn first_mismatch<A, F>(arr: &A, mut predicate: F) -> Option<usize>
where
    A: ArrayLike + ?Sized,
    F: FnMut(&A::Item, usize) -> bool,
{
    (0..arr.length()).find(|&index| !satisfies(arr, &mut predicate, index))
}

fn last_mismatch<A, F>(arr: &A, mut predicate: F) -> Option<usize>
where
    A: ArrayLike + ?Sized,
    F: FnMut(&A::Item, usize) -> bool,
{
    (0..arr.length()).rev().find(|&index| !satisfies(arr, &mut predicate, index))
}
