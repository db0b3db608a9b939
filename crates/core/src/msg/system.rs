// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{MSG_HEARTBEAT, MSG_STARTUP};
use crate::error::PayloadError;
use crate::frame::MsgType;
use crate::message::{expect_end, SbpMessage};
use byteorder::{LittleEndian, ReadBytesExt};
use serde::{Deserialize, Serialize};

/// Boot notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgStartup {
    pub sender: u16,
    pub cause: u8,
    pub startup_type: u8,
    pub reserved: u16,
}

impl SbpMessage for MsgStartup {
    const MSG_TYPE: MsgType = MSG_STARTUP;
    const NAME: &'static str = "MSG_STARTUP";

    fn sender(&self) -> u16 {
        self.sender
    }

    fn parse(sender: u16, payload: &[u8]) -> Result<Self, PayloadError> {
        let mut rd = payload;
        let msg = Self {
            sender,
            cause: rd.read_u8()?,
            startup_type: rd.read_u8()?,
            reserved: rd.read_u16::<LittleEndian>()?,
        };
        expect_end(rd)?;
        Ok(msg)
    }

    fn write_payload(&self, buf: &mut Vec<u8>) {
        buf.push(self.cause);
        buf.push(self.startup_type);
        buf.extend_from_slice(&self.reserved.to_le_bytes());
    }
}

/// Liveness and system health flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgHeartbeat {
    pub sender: u16,
    pub flags: u32,
}

impl MsgHeartbeat {
    /// Bit 0 signals a system error
    pub fn has_error(&self) -> bool {
        self.flags & 0x1 != 0
    }
}

impl SbpMessage for MsgHeartbeat {
    const MSG_TYPE: MsgType = MSG_HEARTBEAT;
    const NAME: &'static str = "MSG_HEARTBEAT";

    fn sender(&self) -> u16 {
        self.sender
    }

    fn parse(sender: u16, payload: &[u8]) -> Result<Self, PayloadError> {
        let mut rd = payload;
        let flags = rd.read_u32::<LittleEndian>()?;
        expect_end(rd)?;
        Ok(Self { sender, flags })
    }

    fn write_payload(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.flags.to_le_bytes());
    }
}
