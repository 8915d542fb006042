/// Rearranges `arr` around its last element (the pivot) with a single
/// left-to-right scan: every key `<=` pivot ends up before the returned
/// boundary index, the pivot lands on it, everything greater follows.
///
/// Callers guarantee `arr.len() >= 2`; ranges of length 0 or 1 never
/// reach the partition step.
pub(crate) fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    let mut boundary = 0;
    for j in 0..pivot {
        if arr[j] <= arr[pivot] {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }
    arr.swap(boundary, pivot);
    boundary
}
