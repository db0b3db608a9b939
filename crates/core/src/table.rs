// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message registry and dispatch
//!
//! A [`MessageTable`] maps msg_type identifiers to decoders. Tables are plain
//! values: deriving a snapshot with an entry added or removed never touches
//! the table it was derived from, so a replay session can run against a
//! deliberately skewed registry without affecting anyone else.

use crate::error::{DispatchError, PayloadError};
use crate::frame::{MsgType, SbpFrame};
use crate::message::{Message, SbpMessage};
use crate::msg::{MsgGpsTime, MsgHeartbeat, MsgLog, MsgPrint, MsgStartup};
use std::collections::BTreeMap;
use std::fmt;

/// Signature shared by all payload decoders
pub type DecodeFn = fn(u16, &[u8]) -> Result<Box<dyn Message>, PayloadError>;

/// Decodes one msg_type's payload into a typed message
#[derive(Clone, Copy)]
pub struct Decoder {
    name: &'static str,
    decode: DecodeFn,
}

impl Decoder {
    pub fn new(name: &'static str, decode: DecodeFn) -> Self {
        Self { name, decode }
    }

    /// Decoder for a concrete message kind
    pub fn of<M: SbpMessage>() -> Self {
        Self::new(M::NAME, decode_boxed::<M>)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn decode(&self, sender: u16, payload: &[u8]) -> Result<Box<dyn Message>, PayloadError> {
        (self.decode)(sender, payload)
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder").field("name", &self.name).finish()
    }
}

fn decode_boxed<M: SbpMessage>(
    sender: u16,
    payload: &[u8],
) -> Result<Box<dyn Message>, PayloadError> {
    Ok(Box::new(M::parse(sender, payload)?))
}

/// Strategy for turning a frame into a typed message
///
/// Implemented by [`MessageTable`] and by any closure with the matching
/// signature, so callers can bind dispatch to a modified snapshot.
pub trait Dispatch {
    fn dispatch(&self, frame: &SbpFrame) -> Result<Box<dyn Message>, DispatchError>;
}

impl<F> Dispatch for F
where
    F: Fn(&SbpFrame) -> Result<Box<dyn Message>, DispatchError>,
{
    fn dispatch(&self, frame: &SbpFrame) -> Result<Box<dyn Message>, DispatchError> {
        self(frame)
    }
}

impl Dispatch for MessageTable {
    fn dispatch(&self, frame: &SbpFrame) -> Result<Box<dyn Message>, DispatchError> {
        self.dispatch_frame(frame)
    }
}

/// msg_type -> decoder registry
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    decoders: BTreeMap<MsgType, Decoder>,
}

impl MessageTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table populated with the built-in catalogue
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.register_message::<MsgPrint>();
        table.register_message::<MsgGpsTime>();
        table.register_message::<MsgLog>();
        table.register_message::<MsgStartup>();
        table.register_message::<MsgHeartbeat>();
        table
    }

    /// Insert or replace the decoder for `msg_type`; last write wins
    pub fn register(&mut self, msg_type: MsgType, decoder: Decoder) -> Option<Decoder> {
        self.decoders.insert(msg_type, decoder)
    }

    /// Register a concrete message kind under its own msg_type
    pub fn register_message<M: SbpMessage>(&mut self) -> Option<Decoder> {
        self.register(M::MSG_TYPE, Decoder::of::<M>())
    }

    pub fn remove(&mut self, msg_type: MsgType) -> Option<Decoder> {
        self.decoders.remove(&msg_type)
    }

    pub fn lookup(&self, msg_type: MsgType) -> Option<&Decoder> {
        self.decoders.get(&msg_type)
    }

    pub fn contains(&self, msg_type: MsgType) -> bool {
        self.decoders.contains_key(&msg_type)
    }

    /// Registered msg_types in ascending order
    pub fn msg_types(&self) -> impl Iterator<Item = MsgType> + '_ {
        self.decoders.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Snapshot with `msg_type` removed
    pub fn without(&self, msg_type: MsgType) -> Self {
        let mut table = self.clone();
        table.remove(msg_type);
        table
    }

    /// Snapshot with `decoder` registered under `msg_type`
    pub fn with(&self, msg_type: MsgType, decoder: Decoder) -> Self {
        let mut table = self.clone();
        table.register(msg_type, decoder);
        table
    }

    /// Decode raw frame bytes (header followed by payload)
    pub fn dispatch_bytes(&self, bytes: &[u8]) -> Result<Box<dyn Message>, DispatchError> {
        let msg_type = SbpFrame::peek_msg_type(bytes)?;
        let decoder = self.resolve(msg_type)?;
        let frame = SbpFrame::from_bytes(bytes)?;
        decode_checked(decoder, &frame)
    }

    /// Decode an already-parsed frame
    pub fn dispatch_frame(&self, frame: &SbpFrame) -> Result<Box<dyn Message>, DispatchError> {
        let decoder = self.resolve(frame.msg_type)?;
        decode_checked(decoder, frame)
    }

    fn resolve(&self, msg_type: MsgType) -> Result<&Decoder, DispatchError> {
        self.lookup(msg_type).ok_or_else(|| {
            tracing::debug!(msg_type, "no decoder registered");
            DispatchError::UnknownMessageType(msg_type)
        })
    }
}

fn decode_checked(decoder: &Decoder, frame: &SbpFrame) -> Result<Box<dyn Message>, DispatchError> {
    let msg = decoder.decode(frame.sender, &frame.payload)?;
    if msg.msg_type() != frame.msg_type {
        return Err(DispatchError::TypeMismatch {
            expected: frame.msg_type,
            actual: msg.msg_type(),
        });
    }
    Ok(msg)
}

/// Decode raw frame bytes against `table`
pub fn dispatch(bytes: &[u8], table: &MessageTable) -> Result<Box<dyn Message>, DispatchError> {
    table.dispatch_bytes(bytes)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
