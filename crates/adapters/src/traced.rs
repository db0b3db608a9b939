// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced driver wrapper for consistent observability

use crate::driver::Driver;
use std::io::{self, Read};
use std::time::Instant;

/// Wrapper that adds tracing to any Driver
pub struct TracedDriver<D> {
    inner: D,
    opened_at: Instant,
    bytes_read: u64,
    reached_eof: bool,
}

impl<D: Driver> TracedDriver<D> {
    pub fn new(inner: D) -> Self {
        tracing::info!(driver = %inner.describe(), "driver opened");
        Self {
            inner,
            opened_at: Instant::now(),
            bytes_read: 0,
            reached_eof: false,
        }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<D: Driver> Read for TracedDriver<D> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = self.inner.read(buf);
        match &result {
            Ok(0) if !buf.is_empty() && !self.reached_eof => {
                self.reached_eof = true;
                tracing::debug!(
                    driver = %self.inner.describe(),
                    bytes_read = self.bytes_read,
                    "end of stream"
                );
            }
            Ok(n) => {
                self.bytes_read += *n as u64;
                tracing::trace!(requested = buf.len(), returned = n, "read");
            }
            Err(e) => tracing::error!(
                driver = %self.inner.describe(),
                error = %e,
                "read failed"
            ),
        }
        result
    }
}

impl<D: Driver> Driver for TracedDriver<D> {
    fn describe(&self) -> String {
        self.inner.describe()
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn close(&mut self) -> io::Result<()> {
        let span = tracing::info_span!("driver.close", driver = %self.inner.describe());
        let _guard = span.enter();

        let result = self.inner.close();
        let elapsed = self.opened_at.elapsed();

        match &result {
            Ok(()) => tracing::info!(
                bytes_read = self.bytes_read,
                elapsed_ms = elapsed.as_millis() as u64,
                "driver closed"
            ),
            Err(e) => tracing::warn!(error = %e, "close failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
