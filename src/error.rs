//! Error types
//!
//! Rendering itself never fails. These errors cover the fallible edges:
//! parsing colors, encoding scenes, exporting datasets and writing files.

use thiserror::Error;

/// Errors that can occur outside the pure render path
#[derive(Error, Debug)]
pub enum RenderError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(String),

    /// Color literal is not `#rgb` or `#rrggbb`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// No dashboard panel with this id
    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    /// No static dataset with this name
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    /// Output format name not recognized
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for RenderError {
    fn from(err: csv::Error) -> Self {
        RenderError::Csv(err.to_string())
    }
}

/// Result type alias for fallible rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::UnknownChart("radar".to_string());
        assert_eq!(err.to_string(), "Unknown chart: radar");

        let err = RenderError::InvalidColor("#12".to_string());
        assert_eq!(err.to_string(), "Invalid color: #12");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RenderError = io_err.into();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
