//! Pickle log replay specs
//!
//! Verify that a recorded binary log replays every record in order.

use crate::prelude::*;

#[test]
fn pickle_log_replays_every_record() {
    let log = LogFixture::pickle(1111);

    let count = LogIterator::open(log.driver(), PickleFormat::new())
        .map(|item| item.unwrap())
        .count();

    assert_eq!(count, 1111);
}

#[test]
fn pickle_log_preserves_timing_and_payloads() {
    let log = LogFixture::pickle(1111);

    for (i, item) in LogIterator::open(log.driver(), PickleFormat::new()).enumerate() {
        let (delta, timestamp, msg) = item.unwrap();
        let expected = session_message(i);
        assert_eq!(timestamp, session_timestamp(i));
        if i > 0 {
            assert_eq!(delta, session_timestamp(i) - session_timestamp(i - 1));
        } else {
            assert_eq!(delta, 0);
        }
        assert_eq!(msg.msg_type(), expected.msg_type());
        assert_eq!(msg.payload(), expected.payload());
    }
}

#[test]
fn pickle_log_replays_identically_twice() {
    let log = LogFixture::pickle(1111);

    let first: Vec<_> = LogIterator::open(log.driver(), PickleFormat::new())
        .map(|item| summarize(item.unwrap()))
        .collect();
    let second: Vec<_> = LogIterator::open(log.driver(), PickleFormat::new())
        .map(|item| summarize(item.unwrap()))
        .collect();

    similar_asserts::assert_eq!(first, second);
}

#[test]
fn pickle_log_decodes_typed_messages() {
    let log = LogFixture::pickle(10);

    let items: Vec<_> = LogIterator::open(log.driver(), PickleFormat::new())
        .collect::<Result<_, _>>()
        .unwrap();

    let gps = items[1].2.downcast_ref::<MsgGpsTime>().unwrap();
    assert_eq!(gps.wn, 1787);
    assert_eq!(gps.tow, 2_567_900);
    assert_eq!(gps.ns_residual, -1);

    let print = items[7].2.downcast_ref::<MsgPrint>().unwrap();
    assert_eq!(print.text, "INFO: tracking 7 satellites\n");
}
