// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driver trait and concrete byte sources
//!
//! A driver is opened by constructing it and released by [`Driver::close`].
//! Reading after close fails with `NotConnected`; closing twice is a no-op.

mod file;
mod stream;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use file::FileDriver;
pub use stream::StreamDriver;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{DriverCall, FakeDriver};

use std::io::{self, Read};

/// An exclusively owned source of raw bytes
pub trait Driver: Read {
    /// Short description for logs, e.g. the file path
    fn describe(&self) -> String;

    /// Whether the underlying handle is still held
    fn is_open(&self) -> bool;

    /// Release the underlying handle
    fn close(&mut self) -> io::Result<()>;
}

impl<D: Driver + ?Sized> Driver for Box<D> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

pub(crate) fn closed_error(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotConnected,
        format!("driver already closed: {}", what),
    )
}
