/// Ranges of this length or shorter are never worth a task spawn.
pub const DEFAULT_SIZE_THRESHOLD: usize = 1000;
/// Deepest recursion level that may still spawn tasks; the live task
/// count grows with 2^depth, so this stays small.
pub const DEFAULT_DEPTH_THRESHOLD: usize = 3;

/// Harness heuristic: one worker thread per this many elements.
pub const ELEMENTS_PER_THREAD: usize = 1_000_000;

const _: () = {
    assert!(DEFAULT_SIZE_THRESHOLD > 0, "size threshold must leave room for a base case");
};
