/*!
 * Tests for error types and conversions
 */

use framecode::errors::{AppError, FrameError, TimestampParseError};
use framecode::model::FrameData;

#[test]
fn test_frameError_apiError_shouldDisplayStatusAndMessage() {
    let error = FrameError::ApiError {
        status_code: 404,
        message: "Video file not found: oop.mp4".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("404"));
    assert!(display.contains("Video file not found"));
}

#[test]
fn test_frameError_rejected_shouldShowExtractedCode() {
    let error = FrameError::Rejected(FrameData::failure("OCR error: ERROR"));
    assert_eq!(error.to_string(), "Frame extraction rejected: OCR error: ERROR");
}

#[test]
fn test_frameError_connectionError_shouldDisplayCorrectly() {
    let error = FrameError::ConnectionError("Host unreachable".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Connection error"));
    assert!(display.contains("Host unreachable"));
}

#[test]
fn test_timestampParseError_shouldNameField() {
    let error = "00:xx:10".parse::<framecode::Timestamp>().unwrap_err();
    assert_eq!(
        error,
        TimestampParseError::InvalidNumber {
            field: "minutes",
            value: "xx".to_string()
        }
    );
    assert!(error.to_string().contains("minutes"));
}

#[test]
fn test_appError_fromFrameError_shouldWrapCorrectly() {
    let app_error: AppError = FrameError::RequestFailed("boom".to_string()).into();
    let display = format!("{}", app_error);
    assert!(display.contains("Frame error"));
    assert!(display.contains("boom"));
}

#[test]
fn test_appError_fromRejectedFrame_shouldShowPayload() {
    let app_error: AppError = FrameError::Rejected(FrameData::failure("OCR error: ERROR")).into();
    assert_eq!(
        app_error.to_string(),
        "Frame error: Frame extraction rejected: OCR error: ERROR"
    );
}

#[test]
fn test_appError_config_shouldKeepContextChain() {
    let error = anyhow::anyhow!("scheme must be http or https").context("Configuration validation failed");
    let app_error = AppError::config(error);
    assert!(matches!(
        app_error,
        AppError::Config(ref msg) if msg == "Configuration validation failed: scheme must be http or https"
    ));
}

#[test]
fn test_appError_invalidTimestamp_shouldCountProblems() {
    assert_eq!(
        AppError::InvalidTimestamp(3).to_string(),
        "Timestamp is invalid (3 problem(s))"
    );
}
