use std::env;
use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use parsort::csv::{read_csv, write_csv};
use parsort::generate::generate_uniform;
use parsort::{initialize_thread_pool, sort_parallel, suggested_thread_count};

const INPUT_FILE: &str = "random_numbers.csv";
const OUTPUT_FILE: &str = "sorted_numbers.csv";
const MAX_VALUE: i32 = 1_000_000;

fn verify_sorted(arr: &[i32]) {
    for i in 1..arr.len() {
        assert!(arr[i - 1] <= arr[i]);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .init();

    let mut args = env::args();
    args.next();

    let size = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => {
            panic!("Usage: parsort <size> <seed?>");
        }
    };

    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>()?,
        None => {
            eprintln!("No seed specified. Using 12345");
            12345
        }
    };

    let threads = suggested_thread_count(size);
    initialize_thread_pool(threads)?;
    info!("Using {} worker threads for {} elements", threads, size);

    let total_start = Instant::now();

    let start = Instant::now();
    let mut numbers = generate_uniform(&mut StdRng::seed_from_u64(seed), size, MAX_VALUE);
    let gen_time = start.elapsed();

    let start = Instant::now();
    write_csv(Path::new(INPUT_FILE), &numbers)?;
    let write_time = start.elapsed();

    let start = Instant::now();
    numbers = read_csv(Path::new(INPUT_FILE))?;
    let read_time = start.elapsed();

    let start = Instant::now();
    sort_parallel(&mut numbers);
    let sort_time = start.elapsed();

    let start = Instant::now();
    write_csv(Path::new(OUTPUT_FILE), &numbers)?;
    let write_sorted_time = start.elapsed();

    verify_sorted(&numbers);

    println!("Time taken for generation: {:?}", gen_time);
    println!("Time taken for writing to input file: {:?}", write_time);
    println!("Time taken for reading from input file: {:?}", read_time);
    println!("Time taken for sorting: {:?}", sort_time);
    println!("Time taken for writing to output file: {:?}", write_sorted_time);
    println!("Total time taken: {:?}", total_start.elapsed());

    println!("Random numbers have been generated, sorted, and written to files.");
    println!("Input file: {}", INPUT_FILE);
    println!("Output file: {}", OUTPUT_FILE);

    Ok(())
}
