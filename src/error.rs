//! Error handling for csvplot-rs
//!
//! All fallible work happens before the chart is shown: argument parsing,
//! reading the preferences file and loading the CSV table. Once the window is
//! up the interaction core clamps instead of failing, so nothing in
//! [`crate::view`] returns these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvplot-rs operations
#[derive(Error, Debug)]
pub enum CsvPlotError {
    /// The CSV path does not exist
    #[error("File '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    /// The file has no columns or no data rows
    #[error("File '{}' is empty", path.display())]
    EmptyData { path: PathBuf },

    /// Malformed CSV content (ragged rows, non-numeric Y cells)
    #[error("Failed to read CSV file: {0}")]
    Parse(String),

    /// The table shape cannot be plotted
    #[error("CSV file must have at least 2 columns ({0})")]
    Schema(String),

    /// Bad command line
    #[error("Invalid arguments: {0}")]
    Usage(String),

    /// Errors related to the display preferences file
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The native window could not be created
    #[error("UI error: {0}")]
    Ui(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CsvPlotError>,
    },
}

impl CsvPlotError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CsvPlotError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CsvPlotError::Usage(_) => 2,
            CsvPlotError::WithContext { source, .. } => source.exit_code(),
            _ => 1,
        }
    }
}

impl From<csv::Error> for CsvPlotError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                CsvPlotError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => CsvPlotError::Parse(error.to_string()),
        }
    }
}

/// Result type alias for csvplot-rs operations
pub type Result<T> = std::result::Result<T, CsvPlotError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CsvPlotError::FileNotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(err.to_string(), "File 'missing.csv' not found");

        let err = CsvPlotError::EmptyData {
            path: PathBuf::from("empty.csv"),
        };
        assert_eq!(err.to_string(), "File 'empty.csv' is empty");

        // main prefixes every diagnostic with "Error: "
        let err = CsvPlotError::Parse("line 2: bad".to_string());
        assert_eq!(err.to_string(), "Failed to read CSV file: line 2: bad");
    }

    #[test]
    fn test_error_with_context() {
        let err = CsvPlotError::Parse("bad row".to_string());
        let with_ctx = err.with_context("Failed to load data.csv");
        assert!(with_ctx.to_string().contains("Failed to load data.csv"));
        assert!(with_ctx.to_string().contains("bad row"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CsvPlotError::Usage("x".into()).exit_code(), 2);
        assert_eq!(CsvPlotError::Schema("x".into()).exit_code(), 1);
        assert_eq!(
            CsvPlotError::Usage("x".into()).with_context("ctx").exit_code(),
            2
        );
    }
}
