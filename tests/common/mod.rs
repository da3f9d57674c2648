/*!
 * Common test utilities for the framecode test suite
 */

use framecode::model::{VideoData, VideoDuration};

/// Link used throughout the suite
pub const WATCH_LINK: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Identifier contained in `WATCH_LINK`
pub const VIDEO_ID: &str = "dQw4w9WgXcQ";

/// Route library logs to the test harness; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Metadata for a video of the given length (fields below 60)
pub fn video_with_duration(hours: u32, minutes: u32, seconds: u32) -> VideoData {
    let fps = 30.0;
    let total_secs = u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds);
    let data = VideoData::from_frame_count("sample.mp4", total_secs * 30, fps);
    assert_eq!(data.duration(), VideoDuration::new(hours, minutes, seconds));
    data
}
