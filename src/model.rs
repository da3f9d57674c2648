/*!
 * Data contracts shared by the extractor, the validator and frame sources.
 *
 * Field names of `VideoData` and `FrameData` match the JSON the frame
 * backend produces, so both types deserialize straight from its responses.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TimestampParseError;

/// Prefix the backend puts in `extracted_code` when OCR failed
pub const OCR_ERROR_PREFIX: &str = "OCR error:";

/// A user-entered position in a video.
///
/// Fields are kept exactly as entered: `0:90:00` is ninety minutes, not
/// one and a half hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Timestamp {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Timestamp {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// True when every field is zero
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Offset into the video in seconds
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// `HH:MM:SS` form used in frame request paths
    pub fn to_clock_string(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_clock_string())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    /// Parse `HH:MM:SS` or `MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();

        let (hours, minutes, seconds) = match parts.as_slice() {
            [m, s] => ("0", *m, *s),
            [h, m, s] => (*h, *m, *s),
            _ => return Err(TimestampParseError::InvalidFormat(trimmed.to_string())),
        };

        Ok(Self {
            hours: parse_field("hours", hours)?,
            minutes: parse_field("minutes", minutes)?,
            seconds: parse_field("seconds", seconds)?,
        })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<u32, TimestampParseError> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(TimestampParseError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| TimestampParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Largest reachable value of each field for a video.
///
/// Not a normalized clock value: the validator compares each field of a
/// candidate against the matching field here on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VideoDuration {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl VideoDuration {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }
}

impl From<&VideoData> for VideoDuration {
    fn from(data: &VideoData) -> Self {
        Self {
            hours: data.duration_hours,
            minutes: data.duration_minutes,
            seconds: data.duration_seconds,
        }
    }
}

/// Video metadata as served by the duration endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoData {
    #[serde(default)]
    pub message: String,
    pub video_filename: String,
    pub duration_hours: u32,
    pub duration_minutes: u32,
    pub duration_seconds: u32,
    #[serde(default)]
    pub duration_formatted: String,
    #[serde(default)]
    pub fps: f64,
    #[serde(default)]
    pub total_frames: u64,
}

impl VideoData {
    /// Derive metadata from a frame count and frame rate.
    ///
    /// A non-positive frame rate yields a zero-length video.
    pub fn from_frame_count(video_filename: impl Into<String>, total_frames: u64, fps: f64) -> Self {
        let total_secs = if fps > 0.0 { total_frames as f64 / fps } else { 0.0 };

        let hours = (total_secs / 3600.0).floor() as u32;
        let minutes = ((total_secs % 3600.0) / 60.0).floor() as u32;
        let seconds = (total_secs % 60.0).floor() as u32;

        Self {
            message: "Video duration retrieved successfully".to_string(),
            video_filename: video_filename.into(),
            duration_hours: hours,
            duration_minutes: minutes,
            duration_seconds: seconds,
            duration_formatted: format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
            fps,
            total_frames,
        }
    }

    pub fn duration(&self) -> VideoDuration {
        VideoDuration::from(self)
    }
}

/// Result of a frame request. Passed through untouched by the core.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameData {
    pub frame_filename: String,
    pub frame_path: String,
    pub frame_url: String,
    pub message: String,
    pub timestamp: String,
    pub timestamp_seconds: f64,
    pub video_filename: String,
    pub extracted_code: String,
    pub formatted_code: String,
}

impl FrameData {
    /// Failure payload: everything empty except the human-readable reason
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            extracted_code: reason.into(),
            ..Self::default()
        }
    }

    pub fn is_ocr_failure(&self) -> bool {
        self.extracted_code.starts_with(OCR_ERROR_PREFIX)
    }
}
