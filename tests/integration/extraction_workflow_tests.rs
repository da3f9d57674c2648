/*!
 * Integration tests for the link -> validate -> fetch workflow
 */

use std::sync::Arc;

use framecode::app_controller::{Controller, ExtractionOutcome};
use framecode::model::Timestamp;
use framecode::providers::mock::MOCK_OCR_FAILURE;
use framecode::providers::{FrameSource, MockFrameSource};
use framecode::validation::TimestampIssue;

use crate::common::{self, VIDEO_ID, WATCH_LINK};

#[test]
fn test_extract_withValidTimestamp_shouldReturnFrame() {
    common::init_logging();
    let source = MockFrameSource::working().with_video_data(common::video_with_duration(0, 5, 30));
    let controller = Controller::new(source);

    let outcome = tokio_test::block_on(controller.extract(WATCH_LINK, Timestamp::new(0, 5, 30))).unwrap();

    match outcome {
        ExtractionOutcome::Extracted(frame) => {
            assert_eq!(frame.timestamp, "00:05:30");
            assert_eq!(frame.timestamp_seconds, 330.0);
            assert!(!frame.formatted_code.is_empty());
        }
        other => panic!("expected a frame, got {:?}", other),
    }
}

#[tokio::test]
async fn test_extract_withEveryViolation_shouldReportAllWithoutFetching() {
    common::init_logging();
    let source = MockFrameSource::working().with_video_data(common::video_with_duration(1, 20, 0));
    let controller = Controller::new(source);

    let outcome = controller
        .extract("https://youtu.be/dQw4w9WgXcQ", Timestamp::new(2, 45, 61))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ExtractionOutcome::InvalidTimestamp(vec![
            TimestampIssue::HoursExceeded { max_hours: 1 },
            TimestampIssue::MinutesExceeded { max_minutes: 20 },
            TimestampIssue::SecondsExceeded,
        ])
    );
    assert_eq!(controller.source().request_count(), 0);
}

#[tokio::test]
async fn test_extract_withShortVideo_shouldForwardLargeSeconds() {
    let source = MockFrameSource::working().with_video_data(common::video_with_duration(0, 0, 45));
    let controller = Controller::new(source);

    let outcome = controller.extract(WATCH_LINK, Timestamp::new(0, 0, 75)).await.unwrap();

    assert!(matches!(outcome, ExtractionOutcome::Extracted(_)));
    let requests = controller.source().requests();
    assert_eq!(requests[0].timestamp, Timestamp::new(0, 0, 75));
}

#[tokio::test]
async fn test_extract_withFailurePayload_shouldPassItThrough() {
    let controller = Controller::new(MockFrameSource::failing());

    let outcome = controller.extract(WATCH_LINK, Timestamp::new(0, 1, 0)).await.unwrap();

    assert_eq!(
        outcome,
        ExtractionOutcome::Failed(framecode::FrameData::failure(MOCK_OCR_FAILURE))
    );
}

#[tokio::test]
async fn test_extractWith_shouldUseSuppliedMetadata() {
    let source = MockFrameSource::working();
    let controller = Controller::new(source);
    let video = common::video_with_duration(2, 0, 0);

    // The mock's own metadata is 5m30s; 1h would be rejected against it
    let outcome = controller
        .extract_with(WATCH_LINK, Timestamp::new(1, 0, 0), &video)
        .await
        .unwrap();

    assert!(matches!(outcome, ExtractionOutcome::Extracted(_)));
}

#[tokio::test]
async fn test_concurrentExtractions_shouldEachResolveOnce() {
    let source = MockFrameSource::slow(20);
    let controller = Arc::new(Controller::new(source));

    let handles: Vec<_> = (1..=8)
        .map(|second| {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                controller
                    .extract(WATCH_LINK, Timestamp::new(0, 0, second))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        assert!(matches!(outcome, ExtractionOutcome::Extracted(_)));
    }

    let requests = controller.source().requests();
    assert_eq!(requests.len(), 8);
    assert!(requests.iter().all(|r| r.video_id == VIDEO_ID));
}

#[tokio::test]
async fn test_controller_withBoxedSource_shouldWork() {
    let source: Box<dyn FrameSource> = Box::new(MockFrameSource::working());
    assert_eq!(source.fetch_video_data(VIDEO_ID).await.unwrap().duration_formatted, "00:05:30");

    let controller = Controller::new(source);
    let outcome = controller.extract(WATCH_LINK, Timestamp::new(0, 2, 0)).await.unwrap();

    assert!(matches!(outcome, ExtractionOutcome::Extracted(_)));
}
