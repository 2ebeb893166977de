use algokit::core::Sequence;
use algokit::prelude::*;
use std::cell::Cell;

// Instrumented collection counting every accessor call. Proves the
// primitives honor their access contracts on implementations where
// element access is expensive.
struct CountingSequence {
    data: Vec<i32>,
    reads: Cell<usize>,
    writes: usize,
    exchanges: usize,
}

impl CountingSequence {
    fn new(data: Vec<i32>) -> Self {
        Self {
            data,
            reads: Cell::new(0),
            writes: 0,
            exchanges: 0,
        }
    }
}

impl Sequence for CountingSequence {
    type Item = i32;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> &i32 {
        self.reads.set(self.reads.get() + 1);
        &self.data[index]
    }

    fn set(&mut self, index: usize, value: i32) {
        self.writes += 1;
        self.data[index] = value;
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.exchanges += 1;
        self.data.swap(a, b);
    }
}

#[test]
fn test_swap_equal_indices_is_a_no_op() {
    let mut seq = CountingSequence::new(vec![1, 2, 3, 4]);
    swap(&mut seq, 2, 2);

    assert_eq!(seq.data, vec![1, 2, 3, 4]);
    assert_eq!(seq.reads.get(), 0);
    assert_eq!(seq.writes, 0);
    assert_eq!(seq.exchanges, 0);
}

#[test]
fn test_swap_distinct_indices() {
    let mut seq = CountingSequence::new(vec![1, 2, 3, 4]);
    swap(&mut seq, 0, 3);

    assert_eq!(seq.data, vec![4, 2, 3, 1]);
    assert_eq!(seq.exchanges, 1);
}

#[test]
fn test_slice_is_an_independent_snapshot() {
    let mut data = vec![10, 20, 30, 40, 50];

    let full = slice(&data, ..);
    let tail = slice(&data, 3..);
    let middle = slice(&data, 1..=3);

    data[3] = 99;
    data[0] = -1;

    assert_eq!(full, vec![10, 20, 30, 40, 50]);
    assert_eq!(tail, vec![40, 50]);
    assert_eq!(middle, vec![20, 30, 40]);
}

#[test]
fn test_sort_through_instrumented_sequence() {
    for algorithm in [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Heap,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
    ] {
        let mut seq = CountingSequence::new(vec![5, -3, 8, 0, 0, 12, -3]);
        sort_in_place_with(&mut seq, algorithm);
        assert_eq!(seq.data, vec![-3, -3, 0, 0, 5, 8, 12], "{algorithm:?}");
    }
}

// Simulate an external struct with flat backing storage (like a columnar
// array). This proves the trait is implementable by outside crates.
struct FlatStorage {
    values: Vec<u64>,
}

impl Sequence for FlatStorage {
    type Item = u64;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> &u64 {
        &self.values[index]
    }

    fn set(&mut self, index: usize, value: u64) {
        self.values[index] = value;
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mut storage = FlatStorage {
        values: vec![300, 100, 200],
    };

    sort_in_place_with(&mut storage, SortAlgorithm::Quick);
    assert_eq!(storage.values, vec![100, 200, 300]);

    assert_eq!(
        find_index_of_with(&storage, &200, SearchAlgorithm::Binary),
        Some(1)
    );
    assert_eq!(interpolate_index_of(&storage, &300), Some(2));
}
