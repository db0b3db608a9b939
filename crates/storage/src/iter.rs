// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lazy replay of a recorded log
//!
//! A [`LogIterator`] owns its driver for its whole life. Each call to
//! `next()` reads exactly one record, dispatches its frame, and yields
//! `(delta, timestamp, message)`. The driver is released as soon as the log
//! is exhausted or a record fails, and on drop otherwise.
//!
//! ```text
//! Open ──next()──▶ Iterating ──end of stream──▶ Exhausted
//!   │                  │
//!   └──────────────────┴──error──▶ Failed
//! ```
//!
//! `Exhausted`, `Failed` and `Closed` are terminal: `next()` yields `None`.

use crate::error::LogError;
use crate::format::LogFormat;
use sbp_adapters::{Driver, DriverGuard};
use sbp_core::{Dispatch, Message, MessageTable};
use std::io::BufReader;
use std::iter::FusedIterator;

/// One replayed record: `(delta, timestamp, message)`
pub type ReplayItem = (i64, i64, Box<dyn Message>);

/// Lifecycle of a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogState {
    /// Driver acquired, nothing read yet
    Open,
    /// At least one record yielded
    Iterating,
    /// End of stream reached cleanly
    Exhausted,
    /// A record failed to read or dispatch
    Failed,
    /// Closed by the caller before exhaustion
    Closed,
}

impl LogState {
    pub fn is_terminal(self) -> bool {
        matches!(self, LogState::Exhausted | LogState::Failed | LogState::Closed)
    }
}

/// Iterator over the records of one log
pub struct LogIterator<D: Driver, F: LogFormat, P: Dispatch = MessageTable> {
    source: BufReader<DriverGuard<D>>,
    format: F,
    dispatcher: P,
    state: LogState,
    records: u64,
}

impl<D: Driver, F: LogFormat> LogIterator<D, F> {
    /// Replay against the built-in message table
    pub fn open(driver: D, format: F) -> Self {
        Self::with_dispatcher(driver, format, MessageTable::builtin())
    }
}

impl<D: Driver, F: LogFormat, P: Dispatch> LogIterator<D, F, P> {
    /// Replay with a caller-supplied dispatch strategy
    pub fn with_dispatcher(driver: D, format: F, dispatcher: P) -> Self {
        tracing::debug!(driver = %driver.describe(), format = format.name(), "opening log");
        Self {
            source: BufReader::new(DriverGuard::acquire(driver)),
            format,
            dispatcher,
            state: LogState::Open,
            records: 0,
        }
    }

    pub fn state(&self) -> LogState {
        self.state
    }

    /// Records yielded so far
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn format(&self) -> &F {
        &self.format
    }

    /// Stop early and release the driver
    pub fn close(&mut self) -> Result<(), LogError> {
        if self.state.is_terminal() {
            return Ok(());
        }
        self.state = LogState::Closed;
        tracing::debug!(records = self.records, "log closed early");
        self.source.get_mut().release()?;
        Ok(())
    }

    fn advance(&mut self) -> Result<Option<ReplayItem>, LogError> {
        let record = self
            .format
            .read_record(&mut self.source)
            .map_err(|e| LogError::from_format(self.records, e))?;

        let Some(record) = record else {
            return Ok(None);
        };

        let msg = self.dispatcher.dispatch(&record.frame)?;
        Ok(Some((record.delta, record.timestamp, msg)))
    }
}

impl<D: Driver, F: LogFormat, P: Dispatch> Iterator for LogIterator<D, F, P> {
    type Item = Result<ReplayItem, LogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_terminal() {
            return None;
        }

        match self.advance() {
            Ok(Some(item)) => {
                self.records += 1;
                self.state = LogState::Iterating;
                Some(Ok(item))
            }
            Ok(None) => {
                self.state = LogState::Exhausted;
                tracing::info!(records = self.records, "log exhausted");
                match self.source.get_mut().release() {
                    Ok(()) => None,
                    Err(e) => Some(Err(e.into())),
                }
            }
            Err(e) => {
                self.state = LogState::Failed;
                tracing::warn!(records = self.records, error = %e, "log replay failed");
                if let Err(close_err) = self.source.get_mut().release() {
                    tracing::warn!(error = %close_err, "failed to close driver");
                }
                Some(Err(e))
            }
        }
    }
}

impl<D: Driver, F: LogFormat, P: Dispatch> FusedIterator for LogIterator<D, F, P> {}

#[cfg(test)]
#[path = "iter_tests.rs"]
mod tests;
