//! Error handling for the sort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Conflicting sort options: {message}")]
    ConflictingOptions { message: String },

    #[error("unknown sort mode: {word}")]
    UnknownSortMode { word: String },

    #[error("Invalid field separator: {sep}")]
    InvalidFieldSeparator { sep: String },

    #[error("extra operand '{operand}'; only one input file is supported")]
    ExtraOperand { operand: String },

    #[error("{file}:{line}: disorder")]
    Disorder { file: String, line: usize },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::PermissionDenied { .. }
            | SortError::FileNotFound { .. }
            | SortError::Io(_) => crate::SORT_FAILURE,

            SortError::Disorder { .. } => crate::EXIT_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create a conflicting options error
    pub fn conflicting_options(message: &str) -> Self {
        SortError::ConflictingOptions {
            message: message.to_string(),
        }
    }

    /// Create an unknown sort mode error
    pub fn unknown_sort_mode(word: &str) -> Self {
        SortError::UnknownSortMode {
            word: word.to_string(),
        }
    }

    /// Create an invalid field separator error
    pub fn invalid_field_separator(sep: &str) -> Self {
        SortError::InvalidFieldSeparator {
            sep: sep.to_string(),
        }
    }

    /// Create an extra operand error
    pub fn extra_operand(operand: &str) -> Self {
        SortError::ExtraOperand {
            operand: operand.to_string(),
        }
    }

    /// Create a disorder error for the check mode
    pub fn not_sorted(file: &str, line: usize) -> Self {
        SortError::Disorder {
            file: file.to_string(),
            line,
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for attaching a filename to I/O errors
pub trait SortContext<T> {
    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
