//! JSON log replay specs
//!
//! Verify that a recorded newline-delimited JSON log replays every record
//! and stays readable on disk.

use crate::prelude::*;

#[test]
fn json_log_replays_every_record() {
    let log = LogFixture::json(2650);

    let count = LogIterator::open(log.driver(), JsonFormat::new())
        .map(|item| item.unwrap())
        .count();

    assert_eq!(count, 2650);
}

#[test]
fn json_log_is_one_record_per_line() {
    let log = LogFixture::json(2650);
    let text = String::from_utf8(log.bytes()).unwrap();

    assert_eq!(text.lines().count(), 2650);
    let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert_eq!(first["data"]["msg_type"], MSG_HEARTBEAT);
    assert_eq!(first["data"]["flags"], 0);
}

#[test]
fn json_and_pickle_replay_the_same_session() {
    let json = LogFixture::json(250);
    let pickle = LogFixture::pickle(250);

    let from_json: Vec<_> = LogIterator::open(json.driver(), JsonFormat::new())
        .map(|item| summarize(item.unwrap()))
        .collect();
    let from_pickle: Vec<_> = LogIterator::open(pickle.driver(), PickleFormat::new())
        .map(|item| summarize(item.unwrap()))
        .collect();

    similar_asserts::assert_eq!(from_json, from_pickle);
}

#[test]
fn config_selects_json_format() {
    let log = LogFixture::json(40);
    let config = ReplayConfig::from_toml("format = \"json\"").unwrap();

    let count = config.open(log.driver()).map(|item| item.unwrap()).count();

    assert_eq!(count, 40);
}
