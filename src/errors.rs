/*!
 * Error types for the framecode library.
 *
 * The extraction and validation functions never fail; these types cover the
 * frame backend, timestamp parsing and the application shell around them.
 */

use thiserror::Error;

use crate::model::FrameData;

/// Errors that can occur when talking to a frame source
#[derive(Error, Debug)]
pub enum FrameError {
    /// The request could not be sent or completed
    #[error("Frame request failed: {0}")]
    RequestFailed(String),

    /// The response body was not the expected JSON
    #[error("Failed to parse frame response: {0}")]
    ParseError(String),

    /// Error returned by the backend itself
    #[error("Backend responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the backend
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The backend answered with a failure payload (e.g. OCR failed)
    #[error("Frame extraction rejected: {}", .0.extracted_code)]
    Rejected(FrameData),
}

/// Errors produced when parsing a `HH:MM:SS` or `MM:SS` timestamp
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampParseError {
    /// Wrong number of `:`-separated parts
    #[error("Timestamp must be in HH:MM:SS or MM:SS format, got '{0}'")]
    InvalidFormat(String),

    /// A part was not a non-negative integer
    #[error("Invalid {field} value '{value}' in timestamp")]
    InvalidNumber {
        /// Which field failed to parse
        field: &'static str,
        /// The offending text
        value: String,
    },
}

/// Errors surfaced by the command-line application
#[derive(Error, Debug)]
pub enum AppError {
    /// The link did not contain a supported video identifier
    #[error("No video identifier found in '{0}'")]
    UnsupportedLink(String),

    /// The timestamp failed validation with this many issues
    #[error("Timestamp is invalid ({0} problem(s))")]
    InvalidTimestamp(usize),

    /// Error from the frame backend, including failure payloads
    #[error("Frame error: {0}")]
    Frame(#[from] FrameError),

    /// Error parsing user input
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampParseError),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap a configuration failure, keeping its context chain
    pub fn config(error: anyhow::Error) -> Self {
        Self::Config(format!("{:#}", error))
    }
}
