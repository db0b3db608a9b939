// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for framing, payload decoding and dispatch

use crate::frame::MsgType;
use thiserror::Error;

/// Errors produced while resolving a frame to a typed message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Frame bytes too short or structurally invalid
    #[error("malformed frame: {reason}")]
    MalformedFrame { reason: String },
    /// No decoder registered for the frame's msg_type
    #[error("No message found for msg_type id {0}")]
    UnknownMessageType(MsgType),
    /// A decoder produced a message of a different type than it was registered under
    #[error("decoder registered for msg_type id {expected} produced msg_type id {actual}")]
    TypeMismatch { expected: MsgType, actual: MsgType },
}

impl DispatchError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedFrame {
            reason: reason.into(),
        }
    }

    /// The msg_type carried by an `UnknownMessageType` error
    pub fn unknown_msg_type(&self) -> Option<MsgType> {
        match self {
            Self::UnknownMessageType(msg_type) => Some(*msg_type),
            _ => None,
        }
    }
}

/// Errors produced by a message decoder reading its payload
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload truncated: {0}")]
    Truncated(#[from] std::io::Error),
    #[error("payload has {0} unexpected trailing bytes")]
    TrailingBytes(usize),
    #[error("payload text is not valid UTF-8: {0}")]
    Text(#[from] std::string::FromUtf8Error),
    #[error("payload of {0} bytes exceeds the 255 byte frame limit")]
    TooLong(usize),
}

impl From<PayloadError> for DispatchError {
    fn from(err: PayloadError) -> Self {
        DispatchError::malformed(err.to_string())
    }
}
