// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{closed_error, Driver};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Driver over a recorded log file
#[derive(Debug)]
pub struct FileDriver {
    path: PathBuf,
    file: Option<File>,
}

impl FileDriver {
    /// Open the file at `path` for reading
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        tracing::debug!(path = %path.display(), "opened log file");
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for FileDriver {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.file.as_mut() {
            Some(file) => file.read(buf),
            None => Err(closed_error(&self.describe())),
        }
    }
}

impl Driver for FileDriver {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn close(&mut self) -> io::Result<()> {
        if self.file.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed log file");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
