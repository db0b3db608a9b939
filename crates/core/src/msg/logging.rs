// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{MSG_LOG, MSG_PRINT};
use crate::error::PayloadError;
use crate::frame::MsgType;
use crate::message::SbpMessage;
use byteorder::ReadBytesExt;
use serde::{Deserialize, Serialize};

/// Free-form text, the whole payload is the string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgPrint {
    pub sender: u16,
    pub text: String,
}

impl SbpMessage for MsgPrint {
    const MSG_TYPE: MsgType = MSG_PRINT;
    const NAME: &'static str = "MSG_PRINT";

    fn sender(&self) -> u16 {
        self.sender
    }

    fn parse(sender: u16, payload: &[u8]) -> Result<Self, PayloadError> {
        let text = String::from_utf8(payload.to_vec())?;
        Ok(Self { sender, text })
    }

    fn write_payload(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.text.as_bytes());
    }
}

/// Text with a syslog-style severity level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgLog {
    pub sender: u16,
    pub level: u8,
    pub text: String,
}

impl SbpMessage for MsgLog {
    const MSG_TYPE: MsgType = MSG_LOG;
    const NAME: &'static str = "MSG_LOG";

    fn sender(&self) -> u16 {
        self.sender
    }

    fn parse(sender: u16, payload: &[u8]) -> Result<Self, PayloadError> {
        let mut rd = payload;
        let level = rd.read_u8()?;
        let text = String::from_utf8(rd.to_vec())?;
        Ok(Self {
            sender,
            level,
            text,
        })
    }

    fn write_payload(&self, buf: &mut Vec<u8>) {
        buf.push(self.level);
        buf.extend_from_slice(self.text.as_bytes());
    }
}

