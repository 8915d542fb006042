pub mod csv;
pub mod generate;
pub mod sort;
mod config;
mod parallel;
mod partition;
mod sequential;
mod sorter;

pub use config::{DEFAULT_DEPTH_THRESHOLD, DEFAULT_SIZE_THRESHOLD};
pub use sort::{initialize_thread_pool, sort, sort_parallel, sort_parallel_with, suggested_thread_count};
pub use sorter::SortPolicy;
