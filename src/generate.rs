//! Input sequence generation for the harness and benches. The sort itself
//! never calls into this module; it only ever borrows the finished buffer.

use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Exp};

/// Uniform keys in `1..=max`, the shape the end-to-end harness feeds the sort.
pub fn generate_uniform(rng: &mut StdRng, len: usize, max: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(1..=max)).collect()
}

/// Exponentially distributed keys, heavily skewed towards small values.
pub fn generate_exponential(rng: &mut StdRng, len: usize, lambda: f64) -> Vec<i32> {
    let exp = Exp::new(lambda).unwrap();
    (0..len)
        .map(|_| 1 + exp.sample(rng).round() as i32)
        .collect()
}

/// Already-sorted input, the worst case for a last-element pivot.
pub fn generate_sorted(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn generate_reverse_sorted(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}
