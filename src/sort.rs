//! Comparison sorts behind a strategy selector.
//!
//! Six classic in-place algorithms, all driven through [`Sequence`] index
//! access and the [`swap`] primitive. The main entry points are
//! [`sort_in_place`] and [`sort_in_place_with`].

use crate::core::{Sequence, slice, swap};
use std::cmp::Ordering;

/// Selects a sorting strategy when the caller knows the shape of their data.
///
/// All variants sort into non-decreasing order. Bubble, Insertion and Merge
/// are stable; Selection, Heap and Quick are not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Adjacent-pair sweeps until a full pass makes no swap. O(n²), stable.
    Bubble,
    /// Shifts each item backward through the sorted prefix. O(n²), stable.
    Insertion,
    /// Swaps the minimum of the unsorted suffix into place. O(n²), unstable.
    Selection,
    /// In-place max-heap build and extraction. O(n log n), unstable.
    Heap,
    /// Lomuto-partition quicksort, last element as pivot. Average
    /// O(n log n), worst O(n²), unstable.
    #[default]
    Quick,
    /// Recursive midpoint split with snapshot-and-merge. O(n log n), O(n)
    /// auxiliary space, stable.
    Merge,
}

/// Sorts the collection into non-decreasing order with the default strategy
/// ([`SortAlgorithm::Quick`]).
///
/// # Examples
///
/// ```
/// use algokit::sort_in_place;
///
/// let mut data = vec![3, 1, 4, 1, 5];
/// sort_in_place(&mut data);
///
/// assert_eq!(data, vec![1, 1, 3, 4, 5]);
/// ```
pub fn sort_in_place<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    sort_in_place_with(seq, SortAlgorithm::default());
}

/// Sorts the collection into non-decreasing order with the given strategy.
///
/// The `Clone` bound exists for [`SortAlgorithm::Merge`], which snapshots
/// the two halves of each active range before merging them back in place;
/// the other five strategies move items by index exchange only.
///
/// # Examples
///
/// ```
/// use algokit::{SortAlgorithm, sort_in_place_with};
///
/// let mut data = vec!["pear", "apple", "fig"];
/// sort_in_place_with(&mut data, SortAlgorithm::Insertion);
///
/// assert_eq!(data, vec!["apple", "fig", "pear"]);
/// ```
pub fn sort_in_place_with<S>(seq: &mut S, algorithm: SortAlgorithm)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(seq),
        SortAlgorithm::Insertion => insertion_sort(seq),
        SortAlgorithm::Selection => selection_sort(seq),
        SortAlgorithm::Heap => heap_sort(seq),
        SortAlgorithm::Quick => quick_sort(seq),
        SortAlgorithm::Merge => merge_sort(seq),
    }
}

fn bubble_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    // Sweep until a full pass finds every adjacent pair in order.
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for i in 0..len - 1 {
            if seq.get(i) > seq.get(i + 1) {
                swap(seq, i, i + 1);
                sorted = false;
            }
        }
    }
}

fn insertion_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    for i in 1..seq.len() {
        // Walk the new item backward through the sorted prefix until it no
        // longer precedes its left neighbor.
        for j in (1..=i).rev() {
            if seq.get(j) < seq.get(j - 1) {
                swap(seq, j - 1, j);
            } else {
                break;
            }
        }
    }
}

fn selection_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        // Select the minimum of the unsorted suffix.
        let mut min_index = i;
        for j in i + 1..len {
            if seq.get(j) < seq.get(min_index) {
                min_index = j;
            }
        }
        swap(seq, i, min_index);
    }
}

fn heap_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let size = seq.len();

    // Build the initial max-heap from the last parent backward.
    for i in (0..size / 2).rev() {
        sift_down(seq, size, i);
    }

    // Extract the root into the shrinking tail, re-heapify the remainder.
    for i in (1..size).rev() {
        swap(seq, 0, i);
        sift_down(seq, i, 0);
    }
}

/// Restores the max-heap property below `root`, treating `seq[..size]` as
/// the live heap region.
fn sift_down<S>(seq: &mut S, size: usize, root: usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    // Find the largest of the root and its in-bounds children.
    let mut largest = root;
    if left < size && seq.get(left) > seq.get(largest) {
        largest = left;
    }
    if right < size && seq.get(right) > seq.get(largest) {
        largest = right;
    }

    if largest != root {
        swap(seq, root, largest);
        // The swap may have broken the subtree below.
        sift_down(seq, size, largest);
    }
}

fn quick_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let len = seq.len();
    if len > 1 {
        quick_sort_range(seq, 0, len - 1);
    }
}

fn quick_sort_range<S>(seq: &mut S, start: usize, end: usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    if start >= end {
        return;
    }
    let pivot = partition(seq, start, end);
    if pivot > start {
        quick_sort_range(seq, start, pivot - 1);
    }
    quick_sort_range(seq, pivot + 1, end);
}

/// Lomuto partition over `seq[start..=end]` with `seq[end]` as the pivot.
///
/// Items comparing less than the pivot are swapped left of a moving
/// boundary; the pivot is then swapped onto the boundary and its final
/// index returned. The pivot stays at `end` for the whole scan, so it can
/// be compared against by index without cloning it out.
fn partition<S>(seq: &mut S, start: usize, end: usize) -> usize
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let mut boundary = start;
    for i in start..end {
        if seq.get(i).cmp(seq.get(end)) == Ordering::Less {
            swap(seq, boundary, i);
            boundary += 1;
        }
    }
    swap(seq, boundary, end);
    boundary
}

fn merge_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    let len = seq.len();
    if len > 1 {
        merge_sort_range(seq, 0, len - 1);
    }
}

fn merge_sort_range<S>(seq: &mut S, start: usize, end: usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    if start < end {
        let middle = (start + end) / 2;
        merge_sort_range(seq, start, middle);
        merge_sort_range(seq, middle + 1, end);
        merge(seq, start, middle, end);
    }
}

/// Merges the two sorted halves `seq[start..=middle]` and
/// `seq[middle+1..=end]` back into `seq[start..=end]`.
///
/// Both halves are snapshotted first, which is what gives merge sort its
/// O(n) auxiliary space. Ties take the left half, preserving the original
/// relative order of equal items.
fn merge<S>(seq: &mut S, start: usize, middle: usize, end: usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    let left = slice(seq, start..=middle);
    let right = slice(seq, middle + 1..=end);

    let mut left_i = 0;
    let mut right_i = 0;
    let mut i = start;
    while left_i < left.len() && right_i < right.len() {
        if left[left_i] <= right[right_i] {
            seq.set(i, left[left_i].clone());
            left_i += 1;
        } else {
            seq.set(i, right[right_i].clone());
            right_i += 1;
        }
        i += 1;
    }
    // Drain whichever half has items left over.
    for item in &left[left_i..] {
        seq.set(i, item.clone());
        i += 1;
    }
    for item in &right[right_i..] {
        seq.set(i, item.clone());
        i += 1;
    }
}
