// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped ownership of a driver
//!
//! [`DriverGuard`] holds a driver for the lifetime of one consumer and
//! closes it exactly once: on an explicit [`DriverGuard::release`], or on
//! drop if that never happened.

use crate::driver::Driver;
use std::io::{self, Read};

/// Owns a driver and guarantees it is closed exactly once
pub struct DriverGuard<D: Driver> {
    driver: Option<D>,
    bytes_read: u64,
}

impl<D: Driver> DriverGuard<D> {
    pub fn acquire(driver: D) -> Self {
        tracing::trace!(driver = %driver.describe(), "driver acquired");
        Self {
            driver: Some(driver),
            bytes_read: 0,
        }
    }

    /// Whether the driver is still held
    pub fn is_held(&self) -> bool {
        self.driver.is_some()
    }

    pub fn get_ref(&self) -> Option<&D> {
        self.driver.as_ref()
    }

    /// Bytes read through this guard
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Close the driver now. Later calls do nothing.
    pub fn release(&mut self) -> io::Result<()> {
        match self.driver.take() {
            Some(mut driver) => {
                tracing::trace!(
                    driver = %driver.describe(),
                    bytes_read = self.bytes_read,
                    "driver released"
                );
                driver.close()
            }
            None => Ok(()),
        }
    }
}

/// Reads from a released guard report end of stream
impl<D: Driver> Read for DriverGuard<D> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.driver.as_mut() {
            Some(driver) => {
                let n = driver.read(buf)?;
                self.bytes_read += n as u64;
                Ok(n)
            }
            None => Ok(0),
        }
    }
}

impl<D: Driver> Drop for DriverGuard<D> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!(error = %e, "failed to close driver");
        }
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
