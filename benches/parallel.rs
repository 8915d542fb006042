use std::env;
use std::time::Duration;
use rand::rngs::StdRng;
use rand::SeedableRng;
use parsort::generate::generate_uniform;
use parsort::sort_parallel;

const MAX_VALUE: i32 = 1_000_000;

pub fn main() {
    let mut args = env::args();
    args.next();

    let size = match args.next() {
        Some(arg) => arg.parse::<usize>().unwrap(),
        None => {
            panic!("Usage: cargo bench --bench parallel <size> <iterations> <seed?>");
        }
    };

    let iterations = match args.next() {
        Some(arg) => arg.parse::<usize>().unwrap(),
        None => {
            panic!("Usage: cargo bench --bench parallel <size> <iterations> <seed?>");
        }
    };

    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>().unwrap(),
        None => {
            eprintln!("No seed specified. Using 12345");
            12345
        }
    };

    // warm up
    {
        let mut data = generate_uniform(&mut StdRng::seed_from_u64(seed), size, MAX_VALUE);
        sort_parallel(&mut data);
    }
    println!("Starting benchmark");
    let mut measurements: Vec<Duration> = Vec::new();

    for i in 0..iterations {
        let mut data = generate_uniform(&mut StdRng::seed_from_u64(seed), size, MAX_VALUE);
        println!("Iteration {}", i);
        let start = std::time::Instant::now();
        sort_parallel(&mut data);
        let duration = start.elapsed();
        measurements.push(duration);
    }

    let avg = measurements.iter().sum::<Duration>() / iterations as u32;
    println!("Parallel Sort using {} threads: Avg {:?}", rayon::current_num_threads(), avg);
}
