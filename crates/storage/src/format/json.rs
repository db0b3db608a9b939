// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Newline-delimited JSON records
//!
//! ```text
//! {"delta":0,"timestamp":1426009522000,"data":{"msg_type":16,"sender":66,"length":5,"payload":"aGVsbG8=","crc":4660,"text":"hello"}}
//! ```
//!
//! `data` carries the frame header, the base64 payload, and the decoded
//! field names of the message for readers of the raw file. Only the frame
//! part is used on replay; dispatch maps it back onto its message type.

use super::{check_frame, LogFormat, DEFAULT_MAX_RECORD_LEN};
use crate::error::FormatError;
use crate::record::LogRecord;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use sbp_core::{Message, MsgType, SbpFrame};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{BufRead, Read, Write};

#[derive(Debug, Clone)]
pub struct JsonFormat {
    max_record_len: u32,
    verify_crc: bool,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self {
            max_record_len: DEFAULT_MAX_RECORD_LEN,
            verify_crc: true,
        }
    }
}

impl JsonFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_record_len(mut self, max_record_len: u32) -> Self {
        self.max_record_len = max_record_len;
        self
    }

    pub fn with_verify_crc(mut self, verify_crc: bool) -> Self {
        self.verify_crc = verify_crc;
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonLine {
    delta: i64,
    timestamp: i64,
    data: JsonFrame,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonFrame {
    msg_type: MsgType,
    sender: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length: Option<usize>,
    payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crc: Option<u16>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl JsonFrame {
    fn into_frame(self) -> Result<SbpFrame, FormatError> {
        let payload = BASE64_STANDARD.decode(self.payload.as_bytes())?;
        if let Some(length) = self.length {
            if length != payload.len() {
                return Err(FormatError::Invalid(format!(
                    "length field says {} bytes, payload has {}",
                    length,
                    payload.len()
                )));
            }
        }

        let mut frame = SbpFrame {
            msg_type: self.msg_type,
            sender: self.sender,
            payload,
            crc: self.crc.unwrap_or_default(),
        };
        if self.crc.is_none() {
            frame.crc = frame.compute_crc().map_err(|e| {
                FormatError::Invalid(format!("msg_type id {}: {}", frame.msg_type, e))
            })?;
        }
        Ok(frame)
    }
}

impl LogFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn read_record(&mut self, src: &mut dyn BufRead) -> Result<Option<LogRecord>, FormatError> {
        let limit = self.max_record_len as usize;
        let mut line = Vec::new();
        loop {
            line.clear();
            // One byte past the limit is enough to tell an overlong line apart
            let read = (&mut *src)
                .take(u64::from(self.max_record_len) + 1)
                .read_until(b'\n', &mut line)?;
            if read == 0 {
                return Ok(None);
            }
            if line.len() > limit {
                return Err(FormatError::Invalid(format!(
                    "record exceeds limit of {} bytes",
                    self.max_record_len
                )));
            }
            if !line.iter().all(u8::is_ascii_whitespace) {
                break;
            }
        }

        let line = std::str::from_utf8(&line)
            .map_err(|_| FormatError::Invalid("record is not valid UTF-8".to_string()))?;
        let parsed: JsonLine = serde_json::from_str(line.trim())?;
        let record = LogRecord::new(parsed.delta, parsed.timestamp, parsed.data.into_frame()?);
        check_frame(&record, self.verify_crc)?;
        Ok(Some(record))
    }

    fn write_record(
        &mut self,
        dst: &mut dyn Write,
        record: &LogRecord,
        message: Option<&dyn Message>,
    ) -> Result<(), FormatError> {
        check_frame(record, false)?;
        let frame = &record.frame;
        let mut fields = Map::new();
        if let Some(Value::Object(named)) = message.map(|m| m.fields()) {
            for (key, value) in named {
                if !matches!(
                    key.as_str(),
                    "msg_type" | "sender" | "length" | "payload" | "crc"
                ) {
                    fields.insert(key, value);
                }
            }
        }

        let line = JsonLine {
            delta: record.delta,
            timestamp: record.timestamp,
            data: JsonFrame {
                msg_type: frame.msg_type,
                sender: frame.sender,
                length: Some(frame.payload.len()),
                payload: BASE64_STANDARD.encode(&frame.payload),
                crc: Some(frame.crc),
                fields,
            },
        };

        let json = serde_json::to_string(&line)?;
        // The limit covers the terminating newline, as on the read side
        if json.len() + 1 > self.max_record_len as usize {
            return Err(FormatError::Invalid(format!(
                "record of {} bytes exceeds limit of {}",
                json.len() + 1,
                self.max_record_len
            )));
        }
        dst.write_all(json.as_bytes())?;
        dst.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
