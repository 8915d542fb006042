use std::cmp::min;

use log::debug;
use rayon::{ThreadPoolBuilder, ThreadPoolBuildError};

use crate::config::ELEMENTS_PER_THREAD;
use crate::parallel::parallel_rec;
use crate::sequential::sequential_rec;
use crate::sorter::{SortPolicy, Task};

/// Sequential baseline: plain in-place quicksort, no tasks, no pool.
pub fn sort<T: Ord>(arr: &mut [T]) {
    debug!("Sorting {} elements sequentially", arr.len());
    sequential_rec(arr);
}

/// Sorts in place on the ambient rayon pool with the default thresholds.
pub fn sort_parallel<T: Ord + Send>(arr: &mut [T]) {
    sort_parallel_with(arr, SortPolicy::default());
}

/// Sorts in place on the ambient rayon pool. Submits the whole slice as the
/// single root task and returns only once the entire task tree has drained.
pub fn sort_parallel_with<T: Ord + Send>(arr: &mut [T], policy: SortPolicy) {
    debug!(
        "Sorting {} elements in parallel (size_threshold={}, depth_threshold={})",
        arr.len(),
        policy.size_threshold,
        policy.depth_threshold
    );
    parallel_rec(Task::new(arr, 0), &policy);
}

/// Replaces the default global thread pool. Call once, before the first
/// parallel sort; later sorts share whatever pool is ambient.
pub fn initialize_thread_pool(num_threads: usize) -> Result<(), ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
}

/// Caps the worker count by input size so small inputs don't pay for idle
/// threads. A tuning heuristic for the harness, nothing the engine relies on.
pub fn suggested_thread_count(len: usize) -> usize {
    min(num_cpus::get(), 1 + len / ELEMENTS_PER_THREAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggested_thread_count_scales_with_input() {
        assert_eq!(suggested_thread_count(0), 1);
        assert_eq!(suggested_thread_count(ELEMENTS_PER_THREAD - 1), 1);
        assert!(suggested_thread_count(64 * ELEMENTS_PER_THREAD) <= num_cpus::get());
    }
}
