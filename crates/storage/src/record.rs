// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted log record

use sbp_core::{Message, PayloadError, SbpFrame};
use serde::{Deserialize, Serialize};

/// One recorded message with its timing metadata
///
/// `delta` is the time since the previous record and `timestamp` the
/// recorder's clock. Neither is assumed to be non-negative or monotonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub delta: i64,
    pub timestamp: i64,
    pub frame: SbpFrame,
}

impl LogRecord {
    pub fn new(delta: i64, timestamp: i64, frame: SbpFrame) -> Self {
        Self {
            delta,
            timestamp,
            frame,
        }
    }

    /// Record a decoded message by re-encoding its frame
    pub fn from_message(
        delta: i64,
        timestamp: i64,
        msg: &dyn Message,
    ) -> Result<Self, PayloadError> {
        Ok(Self::new(delta, timestamp, msg.to_frame()?))
    }
}
