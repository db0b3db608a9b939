// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The message capability shared by every decoded SBP message

use crate::error::PayloadError;
use crate::frame::{MsgType, SbpFrame};
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// A decoded, immutable SBP message of some concrete kind
///
/// Implemented for every [`SbpMessage`]; consumers that only hold a
/// `Box<dyn Message>` can still inspect it generically through
/// [`Message::fields`] or recover the concrete type with
/// [`downcast_ref`](trait.Message.html#method.downcast_ref).
pub trait Message: fmt::Debug + Send + Sync {
    /// Type identifier this message was decoded as
    fn msg_type(&self) -> MsgType;

    /// Identifier of the device that sent the message
    fn sender(&self) -> u16;

    /// Human-readable message name, e.g. `MSG_PRINT`
    fn name(&self) -> &'static str;

    /// Field name/value mapping for generic inspection
    fn fields(&self) -> serde_json::Value;

    /// Re-encode the payload bytes
    fn payload(&self) -> Vec<u8>;

    fn as_any(&self) -> &dyn Any;

    /// Rebuild the frame this message was decoded from
    fn to_frame(&self) -> Result<SbpFrame, PayloadError> {
        SbpFrame::new(self.msg_type(), self.sender(), self.payload())
    }
}

impl dyn Message {
    pub fn downcast_ref<T: Message + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Message + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// A concrete message kind with a fixed type identifier and payload layout
pub trait SbpMessage: Serialize + fmt::Debug + Send + Sync + Sized + 'static {
    const MSG_TYPE: MsgType;
    const NAME: &'static str;

    fn sender(&self) -> u16;

    /// Decode a payload. Must consume the whole payload.
    fn parse(sender: u16, payload: &[u8]) -> Result<Self, PayloadError>;

    fn write_payload(&self, buf: &mut Vec<u8>);
}

impl<M: SbpMessage> Message for M {
    fn msg_type(&self) -> MsgType {
        M::MSG_TYPE
    }

    fn sender(&self) -> u16 {
        SbpMessage::sender(self)
    }

    fn name(&self) -> &'static str {
        M::NAME
    }

    fn fields(&self) -> serde_json::Value {
        // Derived catalogue structs always serialize; a hand-written
        // Serialize that fails yields Null and a warning
        serde_json::to_value(self).unwrap_or_else(|e| {
            tracing::warn!(msg_type = M::MSG_TYPE, error = %e, "cannot serialize message fields");
            serde_json::Value::Null
        })
    }

    fn payload(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_payload(&mut buf);
        buf
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Fail if a decoder left bytes unread
pub(crate) fn expect_end(rest: &[u8]) -> Result<(), PayloadError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(PayloadError::TrailingBytes(rest.len()))
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
