/*!
 * Mock frame source for testing.
 *
 * - `MockFrameSource::working()` - Always returns a frame with code in it
 * - `MockFrameSource::failing()` - Always returns the OCR failure payload
 * - `MockFrameSource::intermittent(n)` - Fails every nth frame request
 * - `MockFrameSource::slow(ms)` - Succeeds after a delay
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::FrameError;
use crate::model::{FrameData, Timestamp, VideoData};
use crate::providers::FrameSource;

/// Failure text the mock puts in `extracted_code`
pub const MOCK_OCR_FAILURE: &str = "OCR error: ERROR";

/// Code snippets handed out in turn by working mocks
const CANNED_SNIPPETS: &[&str] = &[
    r#"class User:
    def __init__(self, full_name, birthday):
        self.name = full_name
        self.birthday = birthday  # yyyymmdd
        # Extract first and last names
        name_pieces = full_name.split(" ")
        self.first_name = name_pieces[0]
        self.last_name = name_pieces[-1]

user = User("Dave Bowman", 19710315)"#,
    r#"def age(self):
    today = datetime.date(2001, 5, 12)
    yyyy = int(self.birthday[0:4])
    return today.year - yyyy"#,
    r#"for user in users:
    print(user.first_name)"#,
];

/// Behavior mode for the mock frame source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Always answers with the OCR failure payload
    Failing,
    /// Fails every Nth frame request
    Intermittent { fail_every: usize },
    /// Succeeds after a delay
    Slow { delay_ms: u64 },
}

/// A frame request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub video_id: String,
    pub timestamp: Timestamp,
}

/// Mock frame source with scripted behavior
#[derive(Debug, Clone)]
pub struct MockFrameSource {
    behavior: MockBehavior,
    /// Shared with clones
    request_count: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    video_data: VideoData,
}

impl MockFrameSource {
    /// Create a new mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            // 5m30s at 30 fps
            video_data: VideoData::from_frame_count("mock.mp4", 9900, 30.0),
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Serve this metadata from `fetch_video_data`
    pub fn with_video_data(mut self, video_data: VideoData) -> Self {
        self.video_data = video_data;
        self
    }

    /// Number of frame requests made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Frame requests made so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    fn success_payload(&self, count: usize, timestamp: &Timestamp) -> FrameData {
        let snippet = CANNED_SNIPPETS[count % CANNED_SNIPPETS.len()];
        FrameData {
            message: "Frame extracted successfully".to_string(),
            video_filename: self.video_data.video_filename.clone(),
            timestamp: timestamp.to_clock_string(),
            timestamp_seconds: timestamp.total_seconds() as f64,
            formatted_code: snippet.to_string(),
            ..FrameData::default()
        }
    }
}

#[async_trait]
impl FrameSource for MockFrameSource {
    async fn fetch_video_data(&self, _video_id: &str) -> Result<VideoData, FrameError> {
        Ok(self.video_data.clone())
    }

    async fn fetch_frame(&self, video_id: &str, timestamp: &Timestamp) -> Result<FrameData, FrameError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(RecordedRequest {
            video_id: video_id.to_string(),
            timestamp: *timestamp,
        });

        match self.behavior {
            MockBehavior::Working => Ok(self.success_payload(count, timestamp)),

            MockBehavior::Failing => Err(FrameError::Rejected(FrameData::failure(MOCK_OCR_FAILURE))),

            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == fail_every - 1 {
                    Err(FrameError::Rejected(FrameData::failure(MOCK_OCR_FAILURE)))
                } else {
                    Ok(self.success_payload(count, timestamp))
                }
            }

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(self.success_payload(count, timestamp))
            }
        }
    }
}
