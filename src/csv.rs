//! Comma-separated file I/O for the harness: a single line of decimal keys,
//! no header, no trailing separator. This is the exchange format between the
//! generation and sorting stages; the sort core never touches a file.

use std::error::Error;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_csv(path: &Path, numbers: &[i32]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for (i, n) in numbers.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write!(writer, "{}", n)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_csv(path: &Path) -> Result<Vec<i32>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    contents
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i32>().map_err(Into::into))
        .collect()
}
