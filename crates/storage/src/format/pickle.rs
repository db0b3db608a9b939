// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binary object records
//!
//! Each record is a serialized `LogRecord` object behind a length prefix:
//!
//! ```text
//! [4 bytes: len LE][len bytes: bincode LogRecord][4 bytes: len LE][...]
//! ```

use super::{check_frame, LogFormat, DEFAULT_MAX_RECORD_LEN};
use crate::error::FormatError;
use crate::record::LogRecord;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use sbp_core::Message;
use std::io::{BufRead, ErrorKind, Write};

#[derive(Debug, Clone)]
pub struct PickleFormat {
    max_record_len: u32,
    verify_crc: bool,
}

impl Default for PickleFormat {
    fn default() -> Self {
        Self {
            max_record_len: DEFAULT_MAX_RECORD_LEN,
            verify_crc: true,
        }
    }
}

impl PickleFormat {
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

impl LogFormat for PickleFormat {
    fn name(&self) -> &'static str {
        "pickle"
    }

    fn read_record(&mut self, src: &mut dyn BufRead) -> Result<Option<LogRecord>, FormatError> {
        if src.fill_buf()?.is_empty() {
            return Ok(None);
        }

        let len = src.read_u32::<LittleEndian>().map_err(truncated("length prefix"))?;
        if len > self.max_record_len {
            return Err(FormatError::Invalid(format!(
                "record of {} bytes exceeds limit of {}",
                len, self.max_record_len
            )));
        }

        let mut buf = vec![0u8; len as usize];
        src.read_exact(&mut buf).map_err(truncated("record body"))?;

        let record: LogRecord = bincode::deserialize(&buf)?;
        check_frame(&record, self.verify_crc)?;
        Ok(Some(record))
    }

    fn write_record(
        &mut self,
        dst: &mut dyn Write,
        record: &LogRecord,
        _message: Option<&dyn Message>,
    ) -> Result<(), FormatError> {
        check_frame(record, false)?;
        let bytes = bincode::serialize(record)?;
        let len = u32::try_from(bytes.len())
            .ok()
            .filter(|len| *len <= self.max_record_len)
            .ok_or_else(|| {
                FormatError::Invalid(format!(
                    "record of {} bytes exceeds limit of {}",
                    bytes.len(),
                    self.max_record_len
                ))
            })?;

        dst.write_u32::<LittleEndian>(len)?;
        dst.write_all(&bytes)?;
        Ok(())
    }
}

/// A stream that ends inside a record is corruption, not a clean end
fn truncated(part: &'static str) -> impl Fn(std::io::Error) -> FormatError {
    move |e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            FormatError::Invalid(format!("truncated {}", part))
        } else {
            FormatError::Io(e)
        }
    }
}

#[cfg(test)]
#[path = "pickle_tests.rs"]
mod tests;
