// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log recorder
//!
//! Appends records in any [`LogFormat`]. When given messages with their
//! timestamps the writer derives each record's `delta` from the previous
//! timestamp; the first record gets a delta of zero.

use crate::error::LogError;
use crate::format::LogFormat;
use crate::record::LogRecord;
use sbp_core::Message;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Recorder for one log
pub struct LogWriter<W: Write, F: LogFormat> {
    out: W,
    format: F,
    last_timestamp: Option<i64>,
    records: u64,
}

impl<F: LogFormat> LogWriter<BufWriter<File>, F> {
    /// Create (or truncate) a log file at `path`
    pub fn create(path: &Path, format: F) -> Result<Self, LogError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        tracing::debug!(path = %path.display(), format = format.name(), "recording log");
        Ok(Self::new(BufWriter::new(file), format))
    }
}

impl<W: Write, F: LogFormat> LogWriter<W, F> {
    pub fn new(out: W, format: F) -> Self {
        Self {
            out,
            format,
            last_timestamp: None,
            records: 0,
        }
    }

    /// Record `msg` as seen at `timestamp`
    pub fn append(&mut self, timestamp: i64, msg: &dyn Message) -> Result<(), LogError> {
        let delta = self
            .last_timestamp
            .map_or(0, |last| timestamp.wrapping_sub(last));
        let record = LogRecord::from_message(delta, timestamp, msg)?;
        self.write(&record, Some(msg))
    }

    /// Append a prepared record verbatim
    pub fn append_record(&mut self, record: &LogRecord) -> Result<(), LogError> {
        self.write(record, None)
    }

    /// Records written so far
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn flush(&mut self) -> Result<(), LogError> {
        self.out.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> Result<W, LogError> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn write(&mut self, record: &LogRecord, msg: Option<&dyn Message>) -> Result<(), LogError> {
        self.format
            .write_record(&mut self.out, record, msg)
            .map_err(|e| LogError::from_format(self.records, e))?;
        self.last_timestamp = Some(record.timestamp);
        self.records += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
