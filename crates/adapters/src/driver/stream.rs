// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{closed_error, Driver};
use std::io::{self, Read};

/// Driver over any already-open byte stream (serial port, socket, pipe)
pub struct StreamDriver<R> {
    name: String,
    inner: Option<R>,
}

impl<R: Read> StreamDriver<R> {
    pub fn new(name: impl Into<String>, inner: R) -> Self {
        Self {
            name: name.into(),
            inner: Some(inner),
        }
    }

    /// Take the stream back, closing the driver
    pub fn into_inner(mut self) -> Option<R> {
        self.inner.take()
    }
}

impl<R: Read> Read for StreamDriver<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.as_mut() {
            Some(inner) => inner.read(buf),
            None => Err(closed_error(&self.name)),
        }
    }
}

impl<R: Read> Driver for StreamDriver<R> {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    fn close(&mut self) -> io::Result<()> {
        if self.inner.take().is_some() {
            tracing::debug!(stream = %self.name, "closed stream");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
