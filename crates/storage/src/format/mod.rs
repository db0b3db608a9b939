// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log formats
//!
//! A format knows how one record is laid out in storage. It reads records
//! one at a time from a buffered source and never looks past the record it
//! was asked for.

mod json;
mod pickle;

pub use json::JsonFormat;
pub use pickle::PickleFormat;

use crate::error::FormatError;
use crate::record::LogRecord;
use sbp_core::Message;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Upper bound on one encoded record unless configured otherwise
pub const DEFAULT_MAX_RECORD_LEN: u32 = 64 * 1024;

/// Storage layout of a recorded log
///
/// Both methods default to failing with `NotImplemented`, so a format that
/// forgets to provide one fails on first use instead of yielding nothing.
pub trait LogFormat {
    fn name(&self) -> &'static str;

    /// Read the next record, or `None` at a clean end of stream
    fn read_record(&mut self, src: &mut dyn BufRead) -> Result<Option<LogRecord>, FormatError> {
        let _ = src;
        Err(FormatError::NotImplemented("next()"))
    }

    /// Append one record. `message` is the decoded form of `record.frame`
    /// when the caller has it.
    fn write_record(
        &mut self,
        dst: &mut dyn Write,
        record: &LogRecord,
        message: Option<&dyn Message>,
    ) -> Result<(), FormatError> {
        let _ = (dst, record, message);
        Err(FormatError::NotImplemented("write()"))
    }
}

/// Format with no decoding step of its own
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedFormat;

impl LogFormat for UnimplementedFormat {
    fn name(&self) -> &'static str {
        "unimplemented"
    }
}

/// Which concrete format a log uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatKind {
    #[default]
    Pickle,
    Json,
}

/// A format chosen at runtime
#[derive(Debug, Clone)]
pub enum AnyFormat {
    Pickle(PickleFormat),
    Json(JsonFormat),
}

impl AnyFormat {
    pub fn kind(&self) -> LogFormatKind {
        match self {
            AnyFormat::Pickle(_) => LogFormatKind::Pickle,
            AnyFormat::Json(_) => LogFormatKind::Json,
        }
    }
}

impl LogFormat for AnyFormat {
    fn name(&self) -> &'static str {
        match self {
            AnyFormat::Pickle(f) => f.name(),
            AnyFormat::Json(f) => f.name(),
        }
    }

    fn read_record(&mut self, src: &mut dyn BufRead) -> Result<Option<LogRecord>, FormatError> {
        match self {
            AnyFormat::Pickle(f) => f.read_record(src),
            AnyFormat::Json(f) => f.read_record(src),
        }
    }

    fn write_record(
        &mut self,
        dst: &mut dyn Write,
        record: &LogRecord,
        message: Option<&dyn Message>,
    ) -> Result<(), FormatError> {
        match self {
            AnyFormat::Pickle(f) => f.write_record(dst, record, message),
            AnyFormat::Json(f) => f.write_record(dst, record, message),
        }
    }
}

/// Reject frames that cannot be encoded, and with `verify_crc` those whose
/// stored CRC disagrees with their contents
pub(crate) fn check_frame(record: &LogRecord, verify_crc: bool) -> Result<(), FormatError> {
    let frame = &record.frame;
    let computed = frame.compute_crc().map_err(|e| {
        FormatError::Invalid(format!("msg_type id {}: {}", frame.msg_type, e))
    })?;
    if verify_crc && computed != frame.crc {
        return Err(FormatError::Invalid(format!(
            "CRC mismatch for msg_type id {}: stored {:#06x}, computed {:#06x}",
            frame.msg_type, frame.crc, computed
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
