// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake driver for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{closed_error, Driver};
use std::io::{self, Read};
use std::sync::{Arc, Mutex};

/// Recorded driver call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    Read { requested: usize, returned: usize },
    Close,
}

#[derive(Debug, Default)]
struct FakeState {
    data: Vec<u8>,
    position: usize,
    open: bool,
    fail_at: Option<usize>,
    calls: Vec<DriverCall>,
}

/// In-memory driver that records every call
///
/// Clones share state, so a test can keep one handle while the code under
/// test owns another.
#[derive(Debug, Clone)]
pub struct FakeDriver {
    state: Arc<Mutex<FakeState>>,
}

impl FakeDriver {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                data: data.into(),
                open: true,
                ..FakeState::default()
            })),
        }
    }

    /// Fail reads once `offset` bytes have been served
    pub fn fail_at(self, offset: usize) -> Self {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).fail_at = Some(offset);
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DriverCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Number of times `close` was called
    pub fn close_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, DriverCall::Close))
            .count()
    }

    /// Bytes served so far
    pub fn position(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).position
    }
}

impl Read for FakeDriver {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if !state.open {
            return Err(closed_error("fake"));
        }

        if state.fail_at.is_some_and(|offset| state.position >= offset) {
            state.calls.push(DriverCall::Read {
                requested: buf.len(),
                returned: 0,
            });
            return Err(io::Error::other("injected read failure"));
        }

        let limit = state
            .fail_at
            .map_or(state.data.len(), |offset| offset.min(state.data.len()));
        let n = buf.len().min(limit.saturating_sub(state.position));
        let start = state.position;
        buf[..n].copy_from_slice(&state.data[start..start + n]);
        state.position += n;
        state.calls.push(DriverCall::Read {
            requested: buf.len(),
            returned: n,
        });
        Ok(n)
    }
}

impl Driver for FakeDriver {
    fn describe(&self) -> String {
        "fake".to_string()
    }

    fn is_open(&self) -> bool {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).open
    }

    fn close(&mut self) -> io::Result<()> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.open = false;
        state.calls.push(DriverCall::Close);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
