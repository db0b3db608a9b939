// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::msg::{MSG_GPS_TIME, MSG_HEARTBEAT, MSG_LOG, MSG_PRINT, MSG_STARTUP};
use yare::parameterized;

fn frame_bytes(msg_type: MsgType, sender: u16, payload: &[u8]) -> Vec<u8> {
    SbpFrame::new(msg_type, sender, payload.to_vec())
        .unwrap()
        .to_bytes()
        .unwrap()
}

fn sample_payload(msg_type: MsgType) -> Vec<u8> {
    match msg_type {
        MSG_PRINT => b"hello".to_vec(),
        MSG_LOG => b"\x04warning".to_vec(),
        MSG_GPS_TIME => vec![0x2E, 0x07, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        MSG_STARTUP => vec![0, 0, 0, 0],
        _ => vec![0, 0, 0, 0],
    }
}

#[test]
fn builtin_registers_catalogue() {
    let table = MessageTable::builtin();

    assert_eq!(table.len(), 5);
    assert_eq!(
        table.msg_types().collect::<Vec<_>>(),
        vec![MSG_PRINT, MSG_GPS_TIME, MSG_LOG, MSG_STARTUP, MSG_HEARTBEAT]
    );
    assert_eq!(table.lookup(MSG_PRINT).unwrap().name(), "MSG_PRINT");
}

#[test]
fn new_table_is_empty() {
    let table = MessageTable::new();
    assert!(table.is_empty());
    assert!(table.lookup(MSG_PRINT).is_none());
}

#[parameterized(
    print = { MSG_PRINT },
    gps_time = { MSG_GPS_TIME },
    log = { MSG_LOG },
    startup = { MSG_STARTUP },
    heartbeat = { MSG_HEARTBEAT },
)]
fn dispatch_returns_message_of_selected_type(msg_type: MsgType) {
    let table = MessageTable::builtin();
    let bytes = frame_bytes(msg_type, 0x42, &sample_payload(msg_type));

    let msg = dispatch(&bytes, &table).unwrap();

    assert_eq!(msg.msg_type(), msg_type);
    assert_eq!(msg.sender(), 0x42);
}

#[test]
fn dispatch_unknown_type_carries_id() {
    let table = MessageTable::builtin();
    let bytes = frame_bytes(0x0BAD, 1, &[]);

    let err = dispatch(&bytes, &table).unwrap_err();

    assert_eq!(err, DispatchError::UnknownMessageType(0x0BAD));
    assert_eq!(err.unknown_msg_type(), Some(0x0BAD));
    assert_eq!(err.to_string(), "No message found for msg_type id 2989");
}

#[test]
fn dispatch_short_frame_is_malformed_not_unknown() {
    let table = MessageTable::new();

    let err = dispatch(&[0x10], &table).unwrap_err();

    assert!(matches!(err, DispatchError::MalformedFrame { .. }));
}

#[test]
fn dispatch_checks_registry_before_header() {
    // Truncated header, but an unknown type is reported first
    let err = dispatch(&[0xAD, 0x0B, 0x01], &MessageTable::builtin()).unwrap_err();
    assert_eq!(err, DispatchError::UnknownMessageType(0x0BAD));

    let err = dispatch(&[0x10, 0x00, 0x01], &MessageTable::builtin()).unwrap_err();
    assert!(matches!(err, DispatchError::MalformedFrame { .. }));
}

#[test]
fn dispatch_bad_payload_is_malformed() {
    let table = MessageTable::builtin();
    let bytes = frame_bytes(MSG_HEARTBEAT, 1, &[0, 0]);

    let err = dispatch(&bytes, &table).unwrap_err();

    assert!(matches!(err, DispatchError::MalformedFrame { .. }));
}

#[test]
fn register_last_write_wins() {
    let mut table = MessageTable::new();

    assert!(table.register_message::<MsgPrint>().is_none());
    let replaced = table.register(MSG_PRINT, Decoder::of::<MsgPrint>());

    assert_eq!(replaced.unwrap().name(), "MSG_PRINT");
    assert_eq!(table.len(), 1);
}

#[test]
fn decoder_registered_under_wrong_type_is_a_mismatch() {
    let table = MessageTable::new().with(0x0011, Decoder::of::<MsgPrint>());
    let bytes = frame_bytes(0x0011, 1, b"text");

    let err = dispatch(&bytes, &table).unwrap_err();

    assert_eq!(
        err,
        DispatchError::TypeMismatch {
            expected: 0x0011,
            actual: MSG_PRINT,
        }
    );
}

#[test]
fn without_leaves_source_table_untouched() {
    let canonical = MessageTable::builtin();
    let skewed = canonical.without(MSG_PRINT);

    assert!(canonical.contains(MSG_PRINT));
    assert!(!skewed.contains(MSG_PRINT));
    assert_eq!(skewed.len(), canonical.len() - 1);
}

#[test]
fn closure_bound_to_snapshot_acts_as_dispatcher() {
    let skewed = MessageTable::builtin().without(MSG_PRINT);
    let dispatcher = |frame: &SbpFrame| skewed.dispatch_frame(frame);

    let print = SbpFrame::new(MSG_PRINT, 1, b"x".to_vec()).unwrap();
    let heartbeat = SbpFrame::new(MSG_HEARTBEAT, 1, vec![0; 4]).unwrap();

    assert_eq!(
        dispatcher.dispatch(&print).unwrap_err(),
        DispatchError::UnknownMessageType(MSG_PRINT)
    );
    assert_eq!(dispatcher.dispatch(&heartbeat).unwrap().msg_type(), MSG_HEARTBEAT);
}

#[test]
fn table_dispatches_frames_through_trait() {
    let table = MessageTable::builtin();
    let frame = SbpFrame::new(MSG_LOG, 5, b"\x03oops".to_vec()).unwrap();

    let msg = Dispatch::dispatch(&table, &frame).unwrap();
    let log = msg.downcast_ref::<MsgLog>().unwrap();

    assert_eq!(log.level, 3);
    assert_eq!(log.text, "oops");
}
