use log::{debug, info, warn};

use crate::errors::FrameError;
use crate::model::{FrameData, Timestamp, VideoData};
use crate::providers::FrameSource;
use crate::validation::{TimestampIssue, TimestampValidator, ValidationResult};
use crate::video_id::extract_video_id;

// @module: Link -> metadata -> validation -> frame workflow

/// Terminal outcome of one extraction attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// The link did not contain a supported video identifier
    UnsupportedLink,
    /// The timestamp failed validation; the frame source was not called
    InvalidTimestamp(Vec<TimestampIssue>),
    /// The frame source returned a frame
    Extracted(FrameData),
    /// The frame source returned its failure payload
    Failed(FrameData),
}

/// Drives one frame extraction against a frame source
#[derive(Debug)]
pub struct Controller<S: FrameSource> {
    // @field: Where frames come from
    source: S,
    validator: TimestampValidator,
}

impl<S: FrameSource> Controller<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            validator: TimestampValidator::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Extract the video identifier from a pasted link
    pub fn inspect_link<'a>(&self, link: &'a str) -> Option<&'a str> {
        let id = extract_video_id(link);
        match id {
            Some(id) => debug!("Link resolved to video id {}", id),
            None => debug!("No video id found in link: {}", link),
        }
        id
    }

    /// Fetch duration metadata for a video
    pub async fn load_video(&self, video_id: &str) -> Result<VideoData, FrameError> {
        let data = self.source.fetch_video_data(video_id).await?;
        info!(
            "Loaded video {} ({})",
            data.video_filename, data.duration_formatted
        );
        Ok(data)
    }

    /// Validate a timestamp against loaded metadata
    pub fn check_timestamp(&self, timestamp: &Timestamp, video: &VideoData) -> ValidationResult {
        self.validator.validate(timestamp, &video.duration())
    }

    /// Request a frame for an already validated timestamp.
    ///
    /// Failure payloads become `ExtractionOutcome::Failed`; transport errors
    /// are returned as `Err`. Nothing is retried here.
    pub async fn fetch(&self, video_id: &str, timestamp: &Timestamp) -> Result<ExtractionOutcome, FrameError> {
        match self.source.fetch_frame(video_id, timestamp).await {
            Ok(frame) => {
                info!("Frame extracted at {}", timestamp);
                Ok(ExtractionOutcome::Extracted(frame))
            }
            Err(FrameError::Rejected(payload)) => {
                warn!("Frame extraction failed at {}: {}", timestamp, payload.extracted_code);
                Ok(ExtractionOutcome::Failed(payload))
            }
            Err(e) => Err(e),
        }
    }

    /// Full workflow against metadata the caller already has
    pub async fn extract_with(
        &self,
        link: &str,
        timestamp: Timestamp,
        video: &VideoData,
    ) -> Result<ExtractionOutcome, FrameError> {
        let Some(video_id) = self.inspect_link(link) else {
            return Ok(ExtractionOutcome::UnsupportedLink);
        };

        self.validate_and_fetch(video_id, timestamp, video).await
    }

    /// Full workflow: resolve the link, load metadata, validate, fetch
    pub async fn extract(&self, link: &str, timestamp: Timestamp) -> Result<ExtractionOutcome, FrameError> {
        let Some(video_id) = self.inspect_link(link) else {
            return Ok(ExtractionOutcome::UnsupportedLink);
        };

        let video = self.load_video(video_id).await?;
        self.validate_and_fetch(video_id, timestamp, &video).await
    }

    async fn validate_and_fetch(
        &self,
        video_id: &str,
        timestamp: Timestamp,
        video: &VideoData,
    ) -> Result<ExtractionOutcome, FrameError> {
        if let ValidationResult::Invalid(issues) = self.check_timestamp(&timestamp, video) {
            debug!("Rejected timestamp {} with {} issue(s)", timestamp, issues.len());
            return Ok(ExtractionOutcome::InvalidTimestamp(issues));
        }

        self.fetch(video_id, &timestamp).await
    }
}
