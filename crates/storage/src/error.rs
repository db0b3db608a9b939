// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for log formats and replay

use sbp_core::{DispatchError, PayloadError};
use std::io;
use thiserror::Error;

/// Errors raised by a format while decoding or encoding one record
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("{0}")]
    Invalid(String),
    #[error("{0} not implemented!")]
    NotImplemented(&'static str),
}

/// Errors surfaced to whoever drives a replay or recording
#[derive(Debug, Error)]
pub enum LogError {
    /// The format left a required capability unimplemented
    #[error("{0} not implemented!")]
    NotImplemented(&'static str),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// Driver errors, passed through unmodified
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("corrupted record {index}: {source}")]
    Corrupted {
        index: u64,
        #[source]
        source: FormatError,
    },
    #[error("cannot encode message: {0}")]
    Encode(#[from] PayloadError),
}

impl LogError {
    /// Attach the record index to a format error
    pub fn from_format(index: u64, err: FormatError) -> Self {
        match err {
            FormatError::Io(e) => LogError::Io(e),
            FormatError::NotImplemented(what) => LogError::NotImplemented(what),
            source => LogError::Corrupted { index, source },
        }
    }

    /// The offending msg_type if replay stopped on an unregistered type
    pub fn unknown_msg_type(&self) -> Option<u16> {
        match self {
            LogError::Dispatch(e) => e.unknown_msg_type(),
            _ => None,
        }
    }
}
