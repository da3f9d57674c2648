/*!
 * Frame sources: where validated timestamps are sent to get a frame back.
 *
 * - `http`: client for the frame extraction backend
 * - `mock`: deterministic stand-in for tests and offline use
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::FrameError;
use crate::model::{FrameData, Timestamp, VideoData};

/// Common trait for all frame sources
///
/// Implementations resolve each call to exactly one outcome. A failure
/// payload from the backend comes back as `FrameError::Rejected`; callers
/// treat it as opaque and do not retry.
#[async_trait]
pub trait FrameSource: Send + Sync + Debug {
    /// Load the duration metadata for a video
    ///
    /// # Arguments
    /// * `video_id` - Identifier extracted from the user's link
    async fn fetch_video_data(&self, video_id: &str) -> Result<VideoData, FrameError>;

    /// Extract the frame at `timestamp` and the code visible in it
    ///
    /// # Arguments
    /// * `video_id` - Identifier extracted from the user's link
    /// * `timestamp` - A timestamp that already passed validation
    ///
    /// # Returns
    /// * `Result<FrameData, FrameError>` - The frame payload or an error
    async fn fetch_frame(&self, video_id: &str, timestamp: &Timestamp) -> Result<FrameData, FrameError>;
}

#[async_trait]
impl<T: FrameSource + ?Sized> FrameSource for Box<T> {
    async fn fetch_video_data(&self, video_id: &str) -> Result<VideoData, FrameError> {
        (**self).fetch_video_data(video_id).await
    }

    async fn fetch_frame(&self, video_id: &str, timestamp: &Timestamp) -> Result<FrameData, FrameError> {
        (**self).fetch_frame(video_id, timestamp).await
    }
}

pub mod http;
pub mod mock;

pub use http::HttpFrameSource;
pub use mock::{MockBehavior, MockFrameSource};
