//! Raw stream specs
//!
//! Verify that frames pulled off a raw byte stream dispatch like recorded
//! ones.

use crate::prelude::*;
use sbp_core::Framer;

#[test]
fn framed_stream_dispatches_in_order() {
    let mut wire = vec![0x00, 0xFF];
    for i in 0..50 {
        wire.extend(session_message(i).to_frame().unwrap().to_wire().unwrap());
    }
    let table = MessageTable::builtin();

    let types: Vec<_> = Framer::new(wire.as_slice())
        .map(|frame| table.dispatch(&frame.unwrap()).unwrap().msg_type())
        .collect();

    let expected: Vec<_> = (0..50).map(|i| session_message(i).msg_type()).collect();
    similar_asserts::assert_eq!(types, expected);
}
