//! Line ordering: key extraction, blank handling, mode dispatch, in-place
//! sorting, the sortedness check and post-sort deduplication.

use std::cmp::Ordering;

use crate::config::{SortConfig, SortMode};
use crate::key;

/// Compares and orders lines under an immutable configuration.
///
/// Typed key values are computed fresh for every comparison; nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct LineSorter {
    mode: SortMode,
    column: usize,
    field_separator: char,
    ignore_trailing_blanks: bool,
    reverse: bool,
}

impl LineSorter {
    pub fn new(config: &SortConfig) -> Self {
        Self {
            mode: config.mode,
            column: config.column,
            field_separator: config.field_separator,
            ignore_trailing_blanks: config.ignore_trailing_blanks,
            reverse: config.reverse,
        }
    }

    /// Extract the sort key from a line: the whole line, or the configured
    /// 1-based column. A column past the last field yields an empty key.
    fn key<'a>(&self, line: &'a str) -> &'a str {
        if self.column == 0 {
            return line;
        }
        line.split(self.field_separator)
            .nth(self.column - 1)
            .unwrap_or("")
    }

    /// Compare two extracted keys under the configured mode, before any
    /// reversal. The typed modes parse the key with leading blanks removed
    /// but tie-break on the key with them intact; the lexicographic mode
    /// compares the key with them intact throughout.
    fn compare_keys(&self, a: &str, b: &str) -> Ordering {
        let (key_a, key_b) = if self.ignore_trailing_blanks {
            (trim_trailing_blanks(a), trim_trailing_blanks(b))
        } else {
            (a, b)
        };
        match self.mode {
            SortMode::Lexicographic => key_a.cmp(key_b),
            SortMode::Numeric => key::parse_numeric(trim_leading_blanks(key_a), key_a)
                .compare(&key::parse_numeric(trim_leading_blanks(key_b), key_b)),
            SortMode::HumanNumeric => key::parse_human(trim_leading_blanks(key_a), key_a)
                .compare(&key::parse_human(trim_leading_blanks(key_b), key_b)),
            SortMode::Month => key::parse_month(trim_leading_blanks(key_a), key_a)
                .compare(&key::parse_month(trim_leading_blanks(key_b), key_b)),
        }
    }

    /// Total ordering over lines, with `reverse` applied last so the
    /// tie-break direction flips along with everything else.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let cmp = self.compare_keys(self.key(a), self.key(b));
        if self.reverse {
            cmp.reverse()
        } else {
            cmp
        }
    }

    pub fn is_less(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Sort lines in place. The sort is stable; true ties only occur for
    /// byte-identical keys, so stability costs nothing.
    pub fn sort(&self, lines: &mut [String]) {
        lines.sort_by(|a, b| self.compare(a, b));
    }

    /// Non-mutating sortedness check. Returns the 1-based number of the
    /// first line that orders before its predecessor, or `None` when the
    /// sequence is already sorted.
    pub fn first_disorder(&self, lines: &[String]) -> Option<usize> {
        (1..lines.len()).find_map(|i| {
            if self.is_less(&lines[i], &lines[i - 1]) {
                Some(i + 1)
            } else {
                None
            }
        })
    }
}

fn trim_leading_blanks(s: &str) -> &str {
    s.trim_start_matches(|c| c == ' ' || c == '\t')
}

fn trim_trailing_blanks(s: &str) -> &str {
    s.trim_end_matches(|c| c == ' ' || c == '\t')
}

/// Remove lines byte-equal to their immediate predecessor. This runs after
/// sorting; it is an adjacent dedup, never a global one.
pub fn dedup_adjacent(lines: &mut Vec<String>) {
    lines.dedup();
}
