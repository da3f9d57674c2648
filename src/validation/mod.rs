/*!
 * Validation of user input before it is sent to a frame source.
 *
 * - `timestamp`: checks a candidate timestamp against a video's duration
 */

pub mod timestamp;

// Re-export main types
pub use timestamp::{validate_timestamp, TimestampIssue, TimestampValidator, ValidationResult};
