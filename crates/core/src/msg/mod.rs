// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in catalogue of well-known messages
//!
//! The full protocol catalogue is generated elsewhere; these are the
//! messages every device emits and that replay tooling probes for.

mod logging;
mod navigation;
mod system;

pub use logging::{MsgLog, MsgPrint};
pub use navigation::MsgGpsTime;
pub use system::{MsgHeartbeat, MsgStartup};

use crate::frame::MsgType;

/// Legacy free-form text output
pub const MSG_PRINT: MsgType = 0x0010;
/// GPS week number and time of week
pub const MSG_GPS_TIME: MsgType = 0x0102;
/// Leveled text log output
pub const MSG_LOG: MsgType = 0x0401;
/// Sent once on device boot
pub const MSG_STARTUP: MsgType = 0xFF00;
/// Periodic liveness message
pub const MSG_HEARTBEAT: MsgType = 0xFFFF;

#[cfg(test)]
#[path = "msg_tests.rs"]
mod tests;
