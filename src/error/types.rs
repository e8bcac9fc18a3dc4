//! Custom error types

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sheetstrip operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SheetStripError {
    /// Argument Error - missing or malformed command-line input
    #[error("Argument error: {message}")]
    Argument { message: String },

    /// Not Found Error - the input file does not exist
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Copy Error - the input could not be copied to the output path
    #[error("Copy error: {message}")]
    Copy { message: String },

    /// Workbook Error - the spreadsheet library rejected an operation
    #[error("Workbook error: {message}")]
    Workbook { message: String },
}

impl SheetStripError {
    /// Exit status reported to the shell. Every failure maps to 1.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the usage line should be printed alongside this error
    #[must_use]
    #[inline]
    pub const fn is_argument(&self) -> bool {
        matches!(*self, Self::Argument { .. })
    }

    /// Create an argument error
    #[inline]
    pub fn argument<S: Into<String>>(message: S) -> Self {
        Self::Argument {
            message: message.into(),
        }
    }

    /// Create a not-found error
    #[inline]
    pub fn not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a copy error
    #[inline]
    pub fn copy<S: Into<String>>(message: S) -> Self {
        Self::Copy {
            message: message.into(),
        }
    }

    /// Create a workbook error
    #[inline]
    pub fn workbook<S: Into<String>>(message: S) -> Self {
        Self::Workbook {
            message: message.into(),
        }
    }
}
