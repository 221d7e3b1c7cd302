//! Error types for pharmacy_stock

use std::fmt;

/// Unified error type for the scan pipeline and CLI operations
#[derive(Debug)]
pub enum ScanError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// HTTP error status code from the Gemini API
    HttpStatus(reqwest::StatusCode),
    /// The model returned no usable text
    EmptyResponse,
    /// The model response does not match the required medicine schema
    Schema(String),
    /// File I/O error (reading the capture from disk)
    Io(std::io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Network(e) => write!(f, "Network error: {}", e),
            ScanError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            ScanError::EmptyResponse => write!(f, "The model returned an empty response"),
            ScanError::Schema(msg) => write!(f, "Could not parse medicine details: {}", msg),
            ScanError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Network(e) => Some(e),
            ScanError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::Network(err)
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

/// Result alias for pharmacy_stock operations
pub type Result<T> = std::result::Result<T, ScanError>;
