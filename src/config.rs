//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// Main configuration structure for sort operations
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Comparison mode
    pub mode: SortMode,
    /// Sort by this 1-based column; 0 selects the whole line
    pub column: usize,
    /// Field separator used for column extraction
    pub field_separator: char,
    /// Reverse the result of comparisons
    pub reverse: bool,
    /// Output only the first of an equal adjacent run
    pub unique: bool,
    /// Strip trailing blanks from the sort key before comparing
    pub ignore_trailing_blanks: bool,
    /// Check whether input is already sorted instead of sorting
    pub check: bool,
    /// Input file; `None` or `-` means stdin
    pub input: Option<String>,
    /// Output file; `None` means stdout
    pub output: Option<String>,
}

/// Sort mode enumeration
///
/// Exactly one mode is active per run; conflicting mode flags are rejected
/// at the CLI boundary before any input is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Standard lexicographic sorting
    Lexicographic,
    /// Numeric sorting by leading number
    Numeric,
    /// Human-readable numeric sorting (with suffixes like k, M, G)
    HumanNumeric,
    /// Month name sorting
    Month,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            mode: SortMode::Lexicographic,
            column: 0,
            field_separator: '\t',
            reverse: false,
            unique: false,
            ignore_trailing_blanks: false,
            check: false,
            input: None,
            output: None,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The input name used in diagnostics; stdin reports as `-`
    pub fn input_label(&self) -> &str {
        self.input.as_deref().unwrap_or("-")
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        matches!(self.input.as_deref(), None | Some("-"))
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.check && self.output.is_some() {
            return Err(SortError::conflicting_options(
                "--output is incompatible with --check",
            ));
        }

        if self.field_separator == '\n' {
            return Err(SortError::invalid_field_separator("\\n"));
        }

        Ok(())
    }
}

impl FromStr for SortMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexicographic" | "text" | "default" => Ok(SortMode::Lexicographic),
            "numeric" | "n" => Ok(SortMode::Numeric),
            "human-numeric" | "h" => Ok(SortMode::HumanNumeric),
            "month" | "m" => Ok(SortMode::Month),
            _ => Err(SortError::unknown_sort_mode(s)),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortMode::Lexicographic => "lexicographic",
            SortMode::Numeric => "numeric",
            SortMode::HumanNumeric => "human-numeric",
            SortMode::Month => "month",
        };
        write!(f, "{name}")
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    /// Set sort mode
    pub fn mode(mut self, mode: SortMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Sort by the given 1-based column
    pub fn column(mut self, column: usize) -> Self {
        self.config.column = column;
        self
    }

    /// Set field separator
    pub fn field_separator(mut self, separator: char) -> Self {
        self.config.field_separator = separator;
        self
    }

    /// Enable reverse sorting
    pub fn reverse(mut self) -> Self {
        self.config.reverse = true;
        self
    }

    /// Enable unique output
    pub fn unique(mut self) -> Self {
        self.config.unique = true;
        self
    }

    /// Strip trailing blanks from sort keys
    pub fn ignore_trailing_blanks(mut self) -> Self {
        self.config.ignore_trailing_blanks = true;
        self
    }

    /// Enable check mode
    pub fn check(mut self) -> Self {
        self.config.check = true;
        self
    }

    /// Set input file
    pub fn input(mut self, file: String) -> Self {
        self.config.input = Some(file);
        self
    }

    /// Set output file
    pub fn output(mut self, file: String) -> Self {
        self.config.output = Some(file);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert_eq!(config.mode, SortMode::Lexicographic);
        assert_eq!(config.column, 0);
        assert_eq!(config.field_separator, '\t');
        assert!(!config.reverse);
        assert!(!config.unique);
        assert!(!config.check);
    }

    #[test]
    fn test_config_builder() {
        let config = SortConfigBuilder::new()
            .mode(SortMode::Numeric)
            .column(2)
            .reverse()
            .unique()
            .build()
            .expect("Failed to build test config");

        assert_eq!(config.mode, SortMode::Numeric);
        assert_eq!(config.column, 2);
        assert!(config.reverse);
        assert!(config.unique);
    }

    #[test]
    fn test_sort_mode_from_str() {
        assert_eq!(
            "numeric"
                .parse::<SortMode>()
                .expect("Failed to parse numeric mode"),
            SortMode::Numeric
        );
        assert_eq!(
            "human-numeric"
                .parse::<SortMode>()
                .expect("Failed to parse human-numeric mode"),
            SortMode::HumanNumeric
        );
        assert_eq!(
            "month"
                .parse::<SortMode>()
                .expect("Failed to parse month mode"),
            SortMode::Month
        );
        assert!("invalid".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_validate_check_with_output() {
        let config = SortConfig {
            check: true,
            output: Some("out.txt".to_string()),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_newline_separator() {
        let config = SortConfig {
            field_separator: '\n',
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_input_label() {
        let config = SortConfig::default();
        assert_eq!(config.input_label(), "-");
        assert!(config.reading_from_stdin());

        let config = SortConfig {
            input: Some("data.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(config.input_label(), "data.txt");
        assert!(!config.reading_from_stdin());
    }
}
