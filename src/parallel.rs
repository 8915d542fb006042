use rayon::join;

use crate::partition::partition;
use crate::sequential::sequential_rec;
use crate::sorter::{SortPolicy, Task};

/// Fork-join recursion over shrinking sub-ranges. Each call partitions its
/// range, then either finishes both halves inline or forks them as two
/// sibling tasks and blocks until both have completed. The partition step
/// always finishes before either child starts, so children only ever see
/// their own disjoint half.
pub(crate) fn parallel_rec<T: Ord + Send>(task: Task<'_, T>, policy: &SortPolicy) {
    if task.is_trivial() {
        return;
    }
    let len = task.arr.len();
    let depth = task.depth;

    let boundary = partition(task.arr);
    let (left, rest) = task.arr.split_at_mut(boundary);
    let right = &mut rest[1..];

    if policy.prefers_sequential(len, depth) {
        sequential_rec(left);
        sequential_rec(right);
    } else {
        join(
            || parallel_rec(Task::new(left, depth + 1), policy),
            || parallel_rec(Task::new(right, depth + 1), policy),
        );
    }
}
