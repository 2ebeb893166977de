use algokit::prelude::*;
use rand::Rng;
use std::time::Instant;

fn random_input(count: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    let mut input: Vec<u64> = Vec::with_capacity(count);
    for _ in 0..count {
        input.push(rng.random());
    }
    input
}

fn assert_sorted(data: &[u64]) {
    for i in 0..data.len() - 1 {
        assert!(data[i] <= data[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_sort_1m_loglinear_strategies() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);
    let input = random_input(count);

    // Only the O(n log n) strategies are feasible at this size.
    for algorithm in [
        SortAlgorithm::Heap,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
    ] {
        let mut data = input.clone();
        let start = Instant::now();
        sort_in_place_with(&mut data, algorithm);
        let duration = start.elapsed();
        println!("Sorted 1M elements with {:?} in {:?}", algorithm, duration);

        assert_sorted(&data);
    }
}

#[test]
fn test_quadratic_strategies_3k() {
    let count = 3_000;
    let input = random_input(count);

    for algorithm in [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
    ] {
        let mut data = input.clone();
        let start = Instant::now();
        sort_in_place_with(&mut data, algorithm);
        let duration = start.elapsed();
        println!("Sorted 3k elements with {:?} in {:?}", algorithm, duration);

        assert_sorted(&data);
    }
}

#[test]
fn test_search_1m() {
    let count = 1_000_000u64;
    let data: Vec<u64> = (0..count).map(|i| i * 3).collect();

    let start = Instant::now();
    for target in (0..count).step_by(1_000) {
        let value = target * 3;
        assert_eq!(
            find_index_of_with(&data, &value, SearchAlgorithm::Binary),
            Some(target as usize)
        );
        assert_eq!(interpolate_index_of(&data, &value), Some(target as usize));
    }
    println!("Searched 1M-element collection in {:?}", start.elapsed());
}
