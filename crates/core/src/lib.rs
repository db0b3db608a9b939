// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sbp-core: message model and dispatch for the Swift Binary Protocol
//!
//! This crate provides:
//! - The SBP frame type with CRC-16 verification and wire encoding
//! - A framer that pulls frames off any byte stream
//! - The `Message` capability and a small catalogue of well-known messages
//! - `MessageTable`, the msg_type -> decoder registry, and dispatch

pub mod error;
pub mod frame;
pub mod framer;
pub mod message;
pub mod msg;
pub mod table;

pub use error::{DispatchError, PayloadError};
pub use frame::{crc16, MsgType, SbpFrame, HEADER_LEN, MAX_PAYLOAD_LEN, SBP_PREAMBLE};
pub use framer::{Framer, FramerError};
pub use message::{Message, SbpMessage};
pub use msg::{
    MsgGpsTime, MsgHeartbeat, MsgLog, MsgPrint, MsgStartup, MSG_GPS_TIME, MSG_HEARTBEAT, MSG_LOG,
    MSG_PRINT, MSG_STARTUP,
};
pub use table::{dispatch, Decoder, Dispatch, MessageTable};
