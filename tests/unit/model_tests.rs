/*!
 * Tests for the data contracts exchanged with the frame backend
 */

use framecode::model::{FrameData, Timestamp, VideoData, VideoDuration};

#[test]
fn test_videoData_roundTripsBackendFieldNames() {
    let data = VideoData::from_frame_count("oop.mp4", 9900, 30.0);
    let json = serde_json::to_value(&data).unwrap();

    for field in [
        "message",
        "video_filename",
        "duration_hours",
        "duration_minutes",
        "duration_seconds",
        "duration_formatted",
        "fps",
        "total_frames",
    ] {
        assert!(json.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(json["duration_formatted"], "00:05:30");
}

#[test]
fn test_frameData_serializesBackendFieldNames() {
    let json = serde_json::to_value(FrameData::default()).unwrap();
    let obj = json.as_object().unwrap();

    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "extracted_code",
            "formatted_code",
            "frame_filename",
            "frame_path",
            "frame_url",
            "message",
            "timestamp",
            "timestamp_seconds",
            "video_filename",
        ]
    );
}

#[test]
fn test_videoDuration_fromVideoData_shouldCopyFields() {
    let data: VideoData = serde_json::from_str(
        r#"{"video_filename": "x.mp4", "duration_hours": 2, "duration_minutes": 75, "duration_seconds": 9}"#,
    )
    .unwrap();

    // Not normalized: 75 minutes stays 75
    assert_eq!(VideoDuration::from(&data), VideoDuration::new(2, 75, 9));
}

#[test]
fn test_timestamp_parseThenFormat_shouldPadFields() {
    let ts: Timestamp = "1:2:3".parse().unwrap();
    assert_eq!(ts.to_clock_string(), "01:02:03");
    assert_eq!(ts.total_seconds(), 3723);
}

#[test]
fn test_timestamp_isZero() {
    assert!(Timestamp::default().is_zero());
    assert!(!Timestamp::new(0, 0, 1).is_zero());
}
