//! Missing message type specs
//!
//! Verify that replay against a registry lacking a recorded type yields
//! the records before it and then fails with a message naming the id.

use crate::prelude::*;

#[test]
fn missing_print_fails_after_preceding_records() {
    let log = LogFixture::pickle(1111);
    let table = MessageTable::builtin().without(MSG_PRINT);
    let dispatcher = move |frame: &SbpFrame| table.dispatch_frame(frame);

    let mut log = LogIterator::with_dispatcher(log.driver(), PickleFormat::new(), dispatcher);

    // heartbeat and gps time come before the first print
    assert!(log.next().unwrap().is_ok());
    assert!(log.next().unwrap().is_ok());

    let err = log.next().unwrap().unwrap_err();
    assert!(err
        .to_string()
        .contains("No message found for msg_type id 16"));
    assert!(matches!(
        err,
        LogError::Dispatch(DispatchError::UnknownMessageType(MSG_PRINT))
    ));
    assert!(log.next().is_none());
    assert_eq!(log.state(), LogState::Failed);
}

#[test]
fn snapshot_does_not_affect_builtin_table() {
    let log = LogFixture::json(20);
    let reduced = MessageTable::builtin().without(MSG_LOG);

    let failed = LogIterator::with_dispatcher(log.driver(), JsonFormat::new(), reduced)
        .find_map(Result::err)
        .unwrap();
    assert_eq!(failed.unknown_msg_type(), Some(MSG_LOG));

    let count = LogIterator::open(log.driver(), JsonFormat::new())
        .map(|item| item.unwrap())
        .count();
    assert_eq!(count, 20);
}
