/*!
 * Timestamp validation against a video's duration.
 *
 * Checks run in a fixed order and every failing check is reported:
 * 1. not all fields zero
 * 2. hours within the video's hours
 * 3. minutes within the video's minutes
 * 4. seconds at most 60, only for videos with at least one minute
 */

use log::debug;
use std::fmt;

use crate::model::{Timestamp, VideoDuration};

/// Fixed ceiling for the seconds field
pub const MAX_SECONDS: u32 = 60;

/// A single reason a timestamp was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampIssue {
    /// Hours, minutes and seconds are all zero
    AllZero,
    /// Hours field is past the video's hours
    HoursExceeded { max_hours: u32 },
    /// Minutes field is past the video's minutes
    MinutesExceeded { max_minutes: u32 },
    /// Seconds field is past the fixed ceiling
    SecondsExceeded,
}

// Plural wording starts at 2; both 0 and 1 read as singular.
fn is_plural(count: u32) -> bool {
    count > 1
}

impl fmt::Display for TimestampIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampIssue::AllZero => {
                write!(f, "Hours, minutes and seconds cannot all be zero at the same time.")
            }
            TimestampIssue::HoursExceeded { max_hours } => {
                let (label, unit) = if is_plural(*max_hours) {
                    ("Hours", "hours")
                } else {
                    ("Hour", "hour")
                };
                write!(f, "{} must not exceed {} {}", label, max_hours, unit)
            }
            TimestampIssue::MinutesExceeded { max_minutes } => {
                let (label, unit) = if is_plural(*max_minutes) {
                    ("Minutes", "minutes")
                } else {
                    ("Minute", "minute")
                };
                write!(f, "{} must not exceed {} {}", label, max_minutes, unit)
            }
            TimestampIssue::SecondsExceeded => {
                write!(f, "Seconds must not exceed {} seconds.", MAX_SECONDS)
            }
        }
    }
}

/// Outcome of validating one timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Issues in check order; never empty
    Invalid(Vec<TimestampIssue>),
}

impl ValidationResult {
    fn from_issues(issues: Vec<TimestampIssue>) -> Self {
        if issues.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(issues)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Issues found, empty when valid
    pub fn issues(&self) -> &[TimestampIssue] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(issues) => issues,
        }
    }

    /// Human-readable messages, one per issue
    pub fn messages(&self) -> Vec<String> {
        self.issues().iter().map(ToString::to_string).collect()
    }
}

/// Validator for user-entered timestamps.
///
/// Stateless; a single instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampValidator;

impl TimestampValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a candidate timestamp against a video's duration.
    ///
    /// Fields are compared one by one without normalization.
    pub fn validate(&self, timestamp: &Timestamp, duration: &VideoDuration) -> ValidationResult {
        let mut issues = Vec::new();

        if timestamp.is_zero() {
            issues.push(TimestampIssue::AllZero);
        }

        if timestamp.hours > duration.hours {
            issues.push(TimestampIssue::HoursExceeded {
                max_hours: duration.hours,
            });
        }

        if timestamp.minutes > duration.minutes {
            issues.push(TimestampIssue::MinutesExceeded {
                max_minutes: duration.minutes,
            });
        }

        // Videos under a minute skip the seconds check entirely.
        if duration.minutes >= 1 && timestamp.seconds > MAX_SECONDS {
            issues.push(TimestampIssue::SecondsExceeded);
        }

        debug!(
            "Timestamp validation: {} against {}h {}m {}s, {} issue(s)",
            timestamp,
            duration.hours,
            duration.minutes,
            duration.seconds,
            issues.len()
        );

        ValidationResult::from_issues(issues)
    }
}

/// Validate with the default validator
pub fn validate_timestamp(timestamp: &Timestamp, duration: &VideoDuration) -> ValidationResult {
    TimestampValidator::new().validate(timestamp, duration)
}
