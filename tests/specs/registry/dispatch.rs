//! Registry dispatch specs
//!
//! Verify decoding of raw frame bytes against the built-in registry and
//! snapshots of it.

use crate::prelude::*;

fn frame_bytes(msg: &dyn Message) -> Vec<u8> {
    msg.to_frame().unwrap().to_bytes().unwrap()
}

#[test]
fn builtin_table_decodes_every_catalogue_type() {
    let table = MessageTable::builtin();

    for i in 0..5 {
        let msg = session_message(i);
        let decoded = table.dispatch_bytes(&frame_bytes(msg.as_ref())).unwrap();
        assert_eq!(decoded.msg_type(), msg.msg_type());
        assert_eq!(decoded.fields(), msg.fields());
    }

    let types: Vec<_> = table.msg_types().collect();
    assert_eq!(
        types,
        vec![MSG_PRINT, MSG_GPS_TIME, MSG_LOG, MSG_STARTUP, MSG_HEARTBEAT]
    );
}

#[test]
fn unknown_type_names_the_id() {
    let bytes = SbpFrame::new(0x1234, 1, vec![]).unwrap().to_bytes().unwrap();

    let err = MessageTable::builtin().dispatch_bytes(&bytes).unwrap_err();

    assert_eq!(err, DispatchError::UnknownMessageType(0x1234));
    assert_eq!(err.to_string(), "No message found for msg_type id 4660");
}

#[test]
fn snapshot_is_independent_of_source() {
    let full = MessageTable::builtin();
    let reduced = full.without(MSG_PRINT);
    let bytes = frame_bytes(&MsgPrint {
        sender: 7,
        text: "hi".to_string(),
    });

    assert!(reduced.dispatch_bytes(&bytes).is_err());
    assert!(full.dispatch_bytes(&bytes).is_ok());
    assert_eq!(full.len(), reduced.len() + 1);
}
