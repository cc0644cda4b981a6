//! Thin I/O collaborators: materialize the input lines, emit the result.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use crate::error::{SortContext, SortResult};

/// Read the entire input into memory, one string per line. `None` or `-`
/// selects stdin.
pub fn read_lines(input: Option<&str>) -> SortResult<Vec<String>> {
    match input {
        None | Some("-") => collect_lines(io::stdin().lock()),
        Some(path) => {
            let file = File::open(path).with_file_context(path)?;
            collect_lines(BufReader::new(file))
        }
    }
}

fn collect_lines<R: BufRead>(reader: R) -> SortResult<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Write lines to stdout or to the given output file, newline-terminated.
pub fn write_lines(lines: &[String], output: Option<&str>) -> SortResult<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_file_context(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}
