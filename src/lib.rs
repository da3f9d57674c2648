/*!
 * # framecode - pull code out of programming videos
 *
 * A Rust library for the input side of a frame-extraction/OCR workflow:
 * the user pastes a video link and a timestamp, and the frame at that
 * position is sent off for text extraction.
 *
 * ## Features
 *
 * - Extract the 11-character video identifier from a pasted link
 * - Validate a user-entered timestamp against the video's duration,
 *   reporting every problem at once
 * - Request frames from an extraction backend behind a pluggable trait
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `video_id`: Identifier extraction from links
 * - `validation`: Timestamp validation
 * - `model`: Timestamps, durations and backend payloads
 * - `providers`: Frame sources:
 *   - `providers::http`: Backend HTTP client
 *   - `providers::mock`: Deterministic stand-in
 * - `app_controller`: End-to-end extraction workflow
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod model;
pub mod providers;
pub mod validation;
pub mod video_id;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, ExtractionOutcome};
pub use errors::{AppError, FrameError, TimestampParseError};
pub use model::{FrameData, Timestamp, VideoData, VideoDuration};
pub use providers::{FrameSource, HttpFrameSource, MockFrameSource};
pub use validation::{validate_timestamp, TimestampIssue, TimestampValidator, ValidationResult};
pub use video_id::extract_video_id;
