// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::MSG_GPS_TIME;
use crate::error::PayloadError;
use crate::frame::MsgType;
use crate::message::{expect_end, SbpMessage};
use byteorder::{LittleEndian, ReadBytesExt};
use serde::{Deserialize, Serialize};

/// GPS time of the current navigation epoch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgGpsTime {
    pub sender: u16,
    /// GPS week number
    pub wn: u16,
    /// Time of week in milliseconds
    pub tow: u32,
    /// Nanosecond residual of `tow`
    pub ns_residual: i32,
    pub flags: u8,
}

impl SbpMessage for MsgGpsTime {
    const MSG_TYPE: MsgType = MSG_GPS_TIME;
    const NAME: &'static str = "MSG_GPS_TIME";

    fn sender(&self) -> u16 {
        self.sender
    }

    fn parse(sender: u16, payload: &[u8]) -> Result<Self, PayloadError> {
        let mut rd = payload;
        let msg = Self {
            sender,
            wn: rd.read_u16::<LittleEndian>()?,
            tow: rd.read_u32::<LittleEndian>()?,
            ns_residual: rd.read_i32::<LittleEndian>()?,
            flags: rd.read_u8()?,
        };
        expect_end(rd)?;
        Ok(msg)
    }

    fn write_payload(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.wn.to_le_bytes());
        buf.extend_from_slice(&self.tow.to_le_bytes());
        buf.extend_from_slice(&self.ns_residual.to_le_bytes());
        buf.push(self.flags);
    }
}
