//! Search strategies over a [`Sequence`].
//!
//! Linear and binary search share the [`find_index_of_with`] dispatch;
//! interpolation search has its own entry point, [`interpolate_index_of`],
//! because it needs a numeric element type rather than just an ordering.
//!
//! All searches return `Some(index)` for a hit and `None` for a miss; a
//! miss is a normal outcome, not an error.

use crate::core::Sequence;
use std::cmp::Ordering;

/// Selects a searching strategy when the caller knows the shape of their
/// data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    /// Front-to-back scan. O(n), no preconditions.
    #[default]
    Linear,
    /// Bisection over an ascending-sorted collection. O(log n).
    Binary,
}

/// Searches the collection for the index of `value` with the default
/// strategy ([`SearchAlgorithm::Linear`]).
///
/// Returns the first index holding an equal item, or `None`.
///
/// # Examples
///
/// ```
/// use algokit::find_index_of;
///
/// let data = vec![5, 3, 9, 3];
///
/// assert_eq!(find_index_of(&data, &3), Some(1));
/// assert_eq!(find_index_of(&data, &7), None);
/// ```
pub fn find_index_of<S>(seq: &S, value: &S::Item) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    find_index_of_with(seq, value, SearchAlgorithm::default())
}

/// Searches the collection for the index of `value` with the given
/// strategy.
///
/// [`SearchAlgorithm::Binary`] requires the collection to already be sorted
/// ascending. That precondition is not checked: on unsorted input the
/// result may be `None` or a wrong index, never a panic.
///
/// # Examples
///
/// ```
/// use algokit::{SearchAlgorithm, find_index_of_with};
///
/// let data = vec![1, 3, 5, 7, 9, 11, 31];
///
/// assert_eq!(find_index_of_with(&data, &31, SearchAlgorithm::Binary), Some(6));
/// assert_eq!(find_index_of_with(&data, &4, SearchAlgorithm::Binary), None);
/// ```
pub fn find_index_of_with<S>(seq: &S, value: &S::Item, algorithm: SearchAlgorithm) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    match algorithm {
        SearchAlgorithm::Linear => linear_search(seq, value),
        SearchAlgorithm::Binary => binary_search(seq, value),
    }
}

fn linear_search<S>(seq: &S, value: &S::Item) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    (0..seq.len()).find(|&i| seq.get(i).cmp(value) == Ordering::Equal)
}

fn binary_search<S>(seq: &S, value: &S::Item) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    // Half-open bisection; the probed item is tested for equality every
    // iteration, so the last remaining candidate is never skipped.
    let mut left = 0;
    let mut right = seq.len();
    while left < right {
        let middle = (left + right) / 2;
        match seq.get(middle).cmp(value) {
            Ordering::Less => left = middle + 1,
            Ordering::Greater => right = middle,
            Ordering::Equal => return Some(middle),
        }
    }
    None
}

/// A numeric element that interpolation search can probe through.
///
/// Implemented for the primitive integer types. The single operation maps
/// a value onto its fractional position within a closed value window; this
/// is the arithmetic that separates interpolation search from binary
/// search, which needs only an ordering.
pub trait Interpolate: Ord {
    /// Position of `value` within `[low, high]` as a fraction in `[0, 1]`.
    ///
    /// Only called after a bounds check established
    /// `low <= value <= high`, and never with `low == high`.
    fn fraction(value: &Self, low: &Self, high: &Self) -> f64;
}

macro_rules! impl_interpolate {
    ($($t:ty),* $(,)?) => {$(
        impl Interpolate for $t {
            fn fraction(value: &Self, low: &Self, high: &Self) -> f64 {
                (*value as f64 - *low as f64) / (*high as f64 - *low as f64)
            }
        }
    )*};
}

impl_interpolate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Searches an ascending-sorted, evenly-distributed numeric collection for
/// the index of `value` using interpolation search.
///
/// Before each probe the target is checked against the live value window
/// `[seq[left], seq[right]]`; values outside it return `None` immediately.
/// The probe index is `left + floor(fraction * (right - left))`, i.e. the
/// interpolated offset truncates toward zero.
///
/// Sortedness and even distribution are unchecked preconditions: on data
/// violating them the result may be wrong, never a panic. Expected
/// O(log log n) on uniform data, O(n) worst case.
///
/// # Examples
///
/// ```
/// use algokit::interpolate_index_of;
///
/// let data = vec![10, 20, 30, 40];
///
/// assert_eq!(interpolate_index_of(&data, &30), Some(2));
/// assert_eq!(interpolate_index_of(&data, &5), None);
/// assert_eq!(interpolate_index_of(&data, &45), None);
/// ```
pub fn interpolate_index_of<S>(seq: &S, value: &S::Item) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: Interpolate,
{
    if seq.is_empty() {
        return None;
    }
    let mut left = 0;
    let mut right = seq.len() - 1;
    while left <= right {
        let low = seq.get(left);
        let high = seq.get(right);
        if value < low || value > high {
            return None;
        }
        if low == high {
            // The window has collapsed to one value and the bounds check
            // already placed `value` inside it.
            return Some(left);
        }
        let fraction = Interpolate::fraction(value, low, high);
        let middle = left + (fraction * (right - left) as f64) as usize;
        match seq.get(middle).cmp(value) {
            Ordering::Less => left = middle + 1,
            Ordering::Greater => {
                if middle == 0 {
                    return None;
                }
                right = middle - 1;
            }
            Ordering::Equal => return Some(middle),
        }
    }
    None
}
