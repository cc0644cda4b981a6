//! Line sorting with typed keys
//!
//! This crate implements a small GNU-style `sort`: lines are ordered under
//! one of four comparison modes (lexicographic, numeric, human-numeric with
//! magnitude suffixes, month names), with column selection, reverse order,
//! post-sort deduplication and a sortedness check.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod key;
pub mod sorter;
pub mod text_io;

// Re-export commonly used types
pub use config::{SortConfig, SortConfigBuilder, SortMode};
pub use error::{SortError, SortResult};
pub use sorter::{dedup_adjacent, LineSorter};

/// Exit codes matching GNU sort
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Main sort function: read the configured input, then sort or check it.
///
/// In check mode the input is left untouched and a [`SortError::Disorder`]
/// carrying the first out-of-order line is returned when the input is not
/// sorted. Otherwise the lines are sorted in place, deduplicated when
/// `unique` is set, and written to the configured output.
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    let mut lines = text_io::read_lines(config.input.as_deref())?;
    let sorter = LineSorter::new(config);

    if config.check {
        return match sorter.first_disorder(&lines) {
            None => Ok(EXIT_SUCCESS),
            Some(line) => Err(SortError::not_sorted(config.input_label(), line)),
        };
    }

    sorter.sort(&mut lines);
    if config.unique {
        dedup_adjacent(&mut lines);
    }
    text_io::write_lines(&lines, config.output.as_deref())?;
    Ok(EXIT_SUCCESS)
}
