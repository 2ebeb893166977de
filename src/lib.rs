//! # Algokit
//!
//! `algokit` is a library of classic in-memory algorithms behind a uniform
//! strategy interface: six comparison sorts, three search strategies, a
//! Fisher-Yates shuffle, and the index primitives they are built from.
//!
//! Every entry point takes an algorithm selector (a closed enum, matched
//! exhaustively) and operates on any collection implementing the
//! [`Sequence`] trait, so the same call drives a `Vec<T>`, a slice, a
//! `VecDeque<T>`, or a user-defined indexable structure.
//!
//! ## Key Features
//!
//! - **Interchangeable strategies**: [`SortAlgorithm`] selects between
//!   Bubble, Insertion, Selection, Heap, Quick and Merge sort;
//!   [`SearchAlgorithm`] between Linear and Binary search. Interpolation
//!   search has a dedicated entry point since it is specialized to numeric
//!   elements.
//! - **One collection contract**: the [`Sequence`] trait abstracts index
//!   access, so algorithms never assume contiguous memory and external
//!   collection types can participate without copying into a `Vec` first.
//! - **In-place operation**: sorts and shuffles mutate the caller's
//!   collection by index exchange; only merge sort allocates, and only
//!   short-lived half-snapshots scoped to each merge.
//! - **Reproducible shuffling**: [`shuffle_with`] accepts any `rand::Rng`,
//!   so tests can pass a seeded generator.
//!
//! ## Usage
//!
//! ### Sorting
//!
//! ```rust
//! use algokit::{SortAlgorithm, sort_in_place, sort_in_place_with};
//!
//! let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
//!
//! // Default strategy (quicksort).
//! sort_in_place(&mut data);
//! assert_eq!(data, vec![1, 1, 2, 3, 4, 5, 6, 9]);
//!
//! // Explicit strategy.
//! let mut words = vec!["cherry", "apple", "banana"];
//! sort_in_place_with(&mut words, SortAlgorithm::Merge);
//! assert_eq!(words, vec!["apple", "banana", "cherry"]);
//! ```
//!
//! ### Searching
//!
//! ```rust
//! use algokit::{SearchAlgorithm, find_index_of_with, interpolate_index_of};
//!
//! let data = vec![1, 3, 5, 7, 9, 11, 31];
//!
//! assert_eq!(find_index_of_with(&data, &31, SearchAlgorithm::Binary), Some(6));
//! assert_eq!(interpolate_index_of(&data, &9), Some(4));
//! assert_eq!(find_index_of_with(&data, &4, SearchAlgorithm::Binary), None);
//! ```
//!
//! Binary and interpolation search require ascending-sorted input; this is
//! a documented precondition, not a checked one. On unsorted data they may
//! return `None` or a wrong index, never panic.
//!
//! ## Performance Characteristics
//!
//! | Strategy | Average / Worst time | Space | Stable |
//! |---|---|---|---|
//! | Bubble | O(n²) | O(1) | yes |
//! | Insertion | O(n²) | O(1) | yes |
//! | Selection | O(n²) | O(1) | no |
//! | Heap | O(n log n) | O(1) | no |
//! | Quick | O(n log n) / O(n²) | O(log n) stack | no |
//! | Merge | O(n log n) | O(n) auxiliary | yes |
//! | Linear search | O(n) | O(1) | - |
//! | Binary search | O(log n) | O(1) | - |
//! | Interpolation search | O(log log n) / O(n) | O(1) | - |
//!
//! This library favors clarity of the classic formulations over raw speed;
//! for production sorting of slices, `slice::sort_unstable` will win.

pub mod core;
pub mod search;
pub mod shuffle;
pub mod sort;

pub use crate::core::{Sequence, slice, swap};
pub use crate::search::{
    Interpolate, SearchAlgorithm, find_index_of, find_index_of_with, interpolate_index_of,
};
pub use crate::shuffle::{shuffle, shuffle_with};
pub use crate::sort::{SortAlgorithm, sort_in_place, sort_in_place_with};

pub mod prelude {
    pub use crate::core::{Sequence, slice, swap};
    pub use crate::search::{
        Interpolate, SearchAlgorithm, find_index_of, find_index_of_with, interpolate_index_of,
    };
    pub use crate::shuffle::{shuffle, shuffle_with};
    pub use crate::sort::{SortAlgorithm, sort_in_place, sort_in_place_with};
}
