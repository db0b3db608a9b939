//! Replay lifecycle specs
//!
//! Verify that the driver behind a replay is released exactly once however
//! the replay ends.

use crate::prelude::*;

#[test]
fn driver_released_when_log_exhausted() {
    let log = LogFixture::pickle(30);
    let driver = FakeDriver::new(log.bytes());

    let count = LogIterator::open(driver.clone(), PickleFormat::new()).count();

    assert_eq!(count, 30);
    assert_eq!(driver.close_count(), 1);
}

#[test]
fn driver_released_when_replay_abandoned() {
    let log = LogFixture::pickle(30);
    let driver = FakeDriver::new(log.bytes());

    let taken = LogIterator::open(driver.clone(), PickleFormat::new())
        .take(3)
        .count();

    assert_eq!(taken, 3);
    assert_eq!(driver.close_count(), 1);
}

#[test]
fn driver_released_when_driver_fails() {
    let log = LogFixture::pickle(30);
    let driver = FakeDriver::new(log.bytes()).fail_at(200);

    let results: Vec<_> = LogIterator::open(driver.clone(), PickleFormat::new()).collect();

    assert!(matches!(results.last(), Some(Err(LogError::Io(_)))));
    assert_eq!(driver.close_count(), 1);
}

#[test]
fn truncated_log_is_reported_as_corrupt() {
    let log = LogFixture::pickle(5);
    let mut bytes = log.bytes();
    bytes.truncate(bytes.len() - 3);

    let results: Vec<_> = LogIterator::open(FakeDriver::new(bytes), PickleFormat::new()).collect();

    assert_eq!(results.len(), 5);
    assert!(matches!(
        results.last(),
        Some(Err(LogError::Corrupted { index: 4, .. }))
    ));
}

#[test]
fn traced_driver_replays_and_counts_bytes() {
    let log = LogFixture::pickle(30);
    let size = log.bytes().len() as u64;
    let driver = FakeDriver::new(log.bytes());
    let traced = TracedDriver::new(driver.clone());
    assert!(traced.is_open());

    let mut replay = LogIterator::open(traced, PickleFormat::new());
    assert_eq!(replay.by_ref().count(), 30);

    assert_eq!(replay.state(), LogState::Exhausted);
    assert_eq!(driver.position() as u64, size);
    assert_eq!(driver.close_count(), 1);
}
