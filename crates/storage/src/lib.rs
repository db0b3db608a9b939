// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sbp-storage: recorded message logs
//!
//! ## Architecture
//!
//! ```text
//! Message → LogRecord → LogWriter → disk (pickle or JSON)
//!                                       ↓
//!               Driver → LogIterator → LogFormat → Dispatch → (delta, timestamp, message)
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod iter;
pub mod record;
pub mod writer;

pub use config::{ConfigError, ReplayConfig};
pub use error::{FormatError, LogError};
pub use format::{
    AnyFormat, JsonFormat, LogFormat, LogFormatKind, PickleFormat, UnimplementedFormat,
    DEFAULT_MAX_RECORD_LEN,
};
pub use iter::{LogIterator, LogState, ReplayItem};
pub use record::LogRecord;
pub use writer::LogWriter;
