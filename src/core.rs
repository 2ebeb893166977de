//! Core trait and index primitives.
//!
//! This module defines:
//! - [`Sequence`]: The collection abstraction every algorithm operates on.
//! - [`swap`] / [`slice`]: The index primitives the algorithms are built from.

use std::collections::VecDeque;
use std::ops::{Bound, RangeBounds};

/// An ordered, mutable, randomly-indexable collection.
///
/// This trait is what the sorting, searching and shuffling entry points
/// accept, so any collection with O(1) index access can be driven through
/// them. `Vec<T>`, slices and `VecDeque<T>` are covered out of the box,
/// and external types (e.g. columnar storage with flat backing buffers)
/// can implement it themselves.
///
/// The element count is fixed for the duration of a call: algorithms only
/// read and write indices in `[0, len)`, never grow or shrink the
/// collection.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use algokit::core::Sequence;
///
/// struct Scores {
///     values: Vec<u32>,
/// }
///
/// impl Sequence for Scores {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.values.len()
///     }
///
///     fn get(&self, index: usize) -> &u32 {
///         &self.values[index]
///     }
///
///     fn set(&mut self, index: usize, value: u32) {
///         self.values[index] = value;
///     }
///
///     fn exchange(&mut self, a: usize, b: usize) {
///         self.values.swap(a, b);
///     }
/// }
/// ```
pub trait Sequence {
    /// The element type stored in the collection.
    type Item;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns a reference to the item at `index`.
    ///
    /// Panics if `index` is out of range.
    fn get(&self, index: usize) -> &Self::Item;

    /// Overwrites the item at `index`.
    ///
    /// Panics if `index` is out of range.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Unconditionally exchanges the items at `a` and `b`.
    ///
    /// Callers wanting the equal-index fast path should go through the free
    /// [`swap`] function instead.
    fn exchange(&mut self, a: usize, b: usize);

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// VecDeque provides O(1) random access, so it is suitable as well.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// Exchanges the items at indices `a` and `b`.
///
/// Equal indices are a guaranteed no-op: the collection accessor is not
/// touched at all, which matters for implementations where element access
/// is expensive or instrumented.
///
/// Panics if either index is out of range (for unequal indices).
///
/// # Examples
///
/// ```
/// use algokit::core::swap;
///
/// let mut data = vec![1, 2, 3];
/// swap(&mut data, 0, 2);
///
/// assert_eq!(data, vec![3, 2, 1]);
/// ```
pub fn swap<S>(seq: &mut S, a: usize, b: usize)
where
    S: Sequence + ?Sized,
{
    if a != b {
        seq.exchange(a, b);
    }
}

/// Copies a range of the collection into a new `Vec`.
///
/// The copy is an independent snapshot: mutating the source afterwards does
/// not affect it. Any range form works, so `slice(&data, 1..=3)`,
/// `slice(&data, 2..)` and `slice(&data, ..)` cover partial, tail and full
/// copies.
///
/// Panics if the range reaches past the end of the collection.
///
/// # Examples
///
/// ```
/// use algokit::core::slice;
///
/// let data = vec![10, 20, 30, 40];
///
/// assert_eq!(slice(&data, 1..=2), vec![20, 30]);
/// assert_eq!(slice(&data, 2..), vec![30, 40]);
/// assert_eq!(slice(&data, ..), data);
/// ```
pub fn slice<S, R>(seq: &S, range: R) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end + 1,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => seq.len(),
    };
    (start..end).map(|i| seq.get(i).clone()).collect()
}
