// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SBP frame structure with CRC-16 verification
//!
//! On the wire a frame is laid out as:
//!
//! ```text
//! 0x55 | msg_type u16 LE | sender u16 LE | len u8 | payload[len] | crc u16 LE
//! ```
//!
//! The CRC covers everything between the preamble and the CRC itself.
//! "Frame bytes" (the input to dispatch) are that same region without the
//! preamble and CRC, so they always begin with the msg_type.

use crate::error::{DispatchError, PayloadError};
use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};

/// Numeric message type identifier
pub type MsgType = u16;

/// Byte that opens every frame on the wire
pub const SBP_PREAMBLE: u8 = 0x55;

/// msg_type + sender + length
pub const HEADER_LEN: usize = 5;

/// Largest payload a single frame can carry
pub const MAX_PAYLOAD_LEN: usize = u8::MAX as usize;

const CRC_POLY: u16 = 0x1021;

/// CRC-16/CCITT (XMODEM variant) as used by SBP
pub fn crc16(data: &[u8]) -> u16 {
    data.iter().fold(0u16, |crc, &byte| {
        let mut crc = crc ^ (u16::from(byte) << 8);
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ CRC_POLY
            } else {
                crc << 1
            };
        }
        crc
    })
}

/// One undecoded SBP message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbpFrame {
    pub msg_type: MsgType,
    pub sender: u16,
    pub payload: Vec<u8>,
    pub crc: u16,
}

impl SbpFrame {
    /// Build a frame, computing its CRC
    pub fn new(msg_type: MsgType, sender: u16, payload: Vec<u8>) -> Result<Self, PayloadError> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(PayloadError::TooLong(payload.len()));
        }
        let crc = crc16(&header_and_payload(msg_type, sender, &payload)?);
        Ok(Self {
            msg_type,
            sender,
            payload,
            crc,
        })
    }

    /// Read only the leading msg_type of raw frame bytes
    pub fn peek_msg_type(bytes: &[u8]) -> Result<MsgType, DispatchError> {
        if bytes.len() < 2 {
            return Err(DispatchError::malformed(format!(
                "{} bytes is too short to hold a msg_type",
                bytes.len()
            )));
        }
        Ok(LittleEndian::read_u16(&bytes[0..2]))
    }

    /// Parse raw frame bytes (no preamble, no CRC)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DispatchError> {
        let msg_type = Self::peek_msg_type(bytes)?;
        if bytes.len() < HEADER_LEN {
            return Err(DispatchError::malformed(format!(
                "header truncated: {} of {} bytes",
                bytes.len(),
                HEADER_LEN
            )));
        }

        let sender = LittleEndian::read_u16(&bytes[2..4]);
        let len = bytes[4] as usize;
        let expected = HEADER_LEN + len;
        if bytes.len() != expected {
            return Err(DispatchError::malformed(format!(
                "length mismatch: header declares {} bytes, frame has {}",
                expected,
                bytes.len()
            )));
        }

        let payload = bytes[HEADER_LEN..].to_vec();
        let crc = crc16(bytes);
        Ok(Self {
            msg_type,
            sender,
            payload,
            crc,
        })
    }

    /// Raw frame bytes: header followed by payload
    ///
    /// Fails with `TooLong` if the payload no longer fits the length byte.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PayloadError> {
        header_and_payload(self.msg_type, self.sender, &self.payload)
    }

    /// Full wire encoding with preamble and CRC
    pub fn to_wire(&self) -> Result<Vec<u8>, PayloadError> {
        let body = self.to_bytes()?;
        let mut wire = Vec::with_capacity(body.len() + 3);
        wire.push(SBP_PREAMBLE);
        wire.extend_from_slice(&body);
        wire.extend_from_slice(&self.crc.to_le_bytes());
        Ok(wire)
    }

    /// CRC computed from the current contents
    pub fn compute_crc(&self) -> Result<u16, PayloadError> {
        Ok(crc16(&self.to_bytes()?))
    }

    /// Verify the frame is encodable and its stored CRC matches
    pub fn verify(&self) -> bool {
        self.compute_crc().is_ok_and(|crc| crc == self.crc)
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

fn header_and_payload(
    msg_type: MsgType,
    sender: u16,
    payload: &[u8],
) -> Result<Vec<u8>, PayloadError> {
    let len = u8::try_from(payload.len()).map_err(|_| PayloadError::TooLong(payload.len()))?;
    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&msg_type.to_le_bytes());
    bytes.extend_from_slice(&sender.to_le_bytes());
    bytes.push(len);
    bytes.extend_from_slice(payload);
    Ok(bytes)
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
