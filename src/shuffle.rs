//! Fisher-Yates shuffle.

use crate::core::{Sequence, swap};
use rand::Rng;

/// Shuffles the collection in place using the thread-local RNG.
///
/// Equivalent to `shuffle_with(seq, &mut rand::rng())`. Uniform over all
/// permutations, not cryptographically secure.
///
/// # Examples
///
/// ```
/// use algokit::shuffle;
///
/// let mut data: Vec<u32> = (0..52).collect();
/// shuffle(&mut data);
///
/// assert_eq!(data.len(), 52);
/// ```
pub fn shuffle<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
{
    shuffle_with(seq, &mut rand::rng());
}

/// Shuffles the collection in place with a caller-supplied generator.
///
/// This is the Fisher-Yates walk: `i` runs from `len - 1` down to `1` and
/// the item at `i` is exchanged with one at a uniform index in `[0, i]`.
/// Passing a seeded generator makes the permutation reproducible.
///
/// # Examples
///
/// ```
/// use algokit::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut a = vec![1, 2, 3, 4, 5];
/// let mut b = a.clone();
///
/// shuffle_with(&mut a, &mut StdRng::seed_from_u64(7));
/// shuffle_with(&mut b, &mut StdRng::seed_from_u64(7));
///
/// assert_eq!(a, b);
/// ```
pub fn shuffle_with<S, R>(seq: &mut S, rng: &mut R)
where
    S: Sequence + ?Sized,
    R: Rng + ?Sized,
{
    for i in (1..seq.len()).rev() {
        let j = rng.random_range(0..=i);
        swap(seq, i, j);
    }
}
