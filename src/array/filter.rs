use super::ArrayLike;
use crate::language::Truthy;

/// Copies the truthy elements of `arr` into a new [`Vec`]. Empty slots are removed along with the
/// falsy elements.
///
/// # Examples
/// ```
/// # use mjd_utils::array::compact;
/// assert_eq!(compact(&[0, 1, 0, 2, 3]), [1, 2, 3]);
/// assert_eq!(compact(&["", "a", "b"]), ["a", "b"]);
/// ```
pub fn compact<A>(arr: &A) -> Vec<A::Item>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone + Truthy,
{
    let truthy = present(arr).filter(|element| element.is_truthy());
    truthy.cloned().collect()
}

/// Copies every present element of `arr` into a new [`Vec`], removing empty slots.
pub fn unsparse<A>(arr: &A) -> Vec<A::Item>
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
{
    present(arr).cloned().collect()
}

/// Splits the elements of `arr` into those that satisfy `predicate` and those that don't, in that
/// order. Empty slots are skipped and the predicate is called exactly once per present element.
///
/// # Examples
/// ```
/// # use mjd_utils::array::partition;
/// let (even, odd) = partition(&[1, 2, 3, 4, 5], |n, _| n % 2 == 0);
/// assert_eq!(even, [2, 4]);
/// assert_eq!(odd, [1, 3, 5]);
/// ```
pub fn partition<A, F>(arr: &A, mut predicate: F) -> (Vec<A::Item>, Vec<A::Item>)
where
    A: ArrayLike + ?Sized,
    A::Item: Clone,
    F: FnMut(&A::Item, usize) -> bool,
{
    let mut pass = Vec::new();
    let mut fail = Vec::new();

    for index in 0..arr.length() {
        if let Some(element) = arr.slot(index) {
            if predicate(element, index) {
                pass.push(element.clone());
            } else {
                fail.push(element.clone());
            }
        }
    }

    (pass, fail)
}

fn present<A>(arr: &A) -> impl Iterator<Item = &A::Item>
where
    A: ArrayLike + ?Sized,
{
    (0..arr.length()).filter_map(|index| arr.slot(index))
}
