// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Frame reader for raw SBP byte streams
//!
//! Scans for the preamble, reads header, payload and CRC, and hands back
//! whole frames. A frame whose CRC does not match is dropped and the scan
//! resumes at the next preamble. A stream that ends part-way through a frame
//! ends cleanly; the partial frame is discarded.

use crate::frame::{crc16, SbpFrame, HEADER_LEN, SBP_PREAMBLE};
use byteorder::{ByteOrder, LittleEndian};
use std::io::{self, BufReader, ErrorKind, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FramerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Pulls frames off any byte source
pub struct Framer<R> {
    reader: BufReader<R>,
    frames: u64,
    crc_errors: u64,
}

impl<R: Read> Framer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            frames: 0,
            crc_errors: 0,
        }
    }

    /// Read the next valid frame, or `None` at end of stream
    pub fn read_frame(&mut self) -> Result<Option<SbpFrame>, FramerError> {
        loop {
            if !self.sync()? {
                return Ok(None);
            }

            let mut header = [0u8; HEADER_LEN];
            if !self.fill(&mut header)? {
                return Ok(None);
            }
            let len = header[4] as usize;

            let mut payload = vec![0u8; len];
            let mut crc_bytes = [0u8; 2];
            if !self.fill(&mut payload)? || !self.fill(&mut crc_bytes)? {
                return Ok(None);
            }

            let crc = LittleEndian::read_u16(&crc_bytes);
            let mut covered = header.to_vec();
            covered.extend_from_slice(&payload);
            let computed = crc16(&covered);
            if crc != computed {
                self.crc_errors += 1;
                tracing::warn!(
                    msg_type = LittleEndian::read_u16(&header[0..2]),
                    expected = crc,
                    computed,
                    "dropping frame with bad CRC"
                );
                continue;
            }

            self.frames += 1;
            return Ok(Some(SbpFrame {
                msg_type: LittleEndian::read_u16(&header[0..2]),
                sender: LittleEndian::read_u16(&header[2..4]),
                payload,
                crc,
            }));
        }
    }

    /// Frames returned so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames dropped because of CRC mismatch
    pub fn crc_errors(&self) -> u64 {
        self.crc_errors
    }

    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    /// Advance past the next preamble. Returns false at end of stream.
    fn sync(&mut self) -> Result<bool, FramerError> {
        let mut byte = [0u8; 1];
        loop {
            if !self.fill(&mut byte)? {
                return Ok(false);
            }
            if byte[0] == SBP_PREAMBLE {
                return Ok(true);
            }
        }
    }

    /// Fill `buf` completely. Returns false if the stream ends first.
    fn fill(&mut self, buf: &mut [u8]) -> Result<bool, FramerError> {
        match self.reader.read_exact(buf) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                tracing::debug!(frames = self.frames, "stream ended");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<R: Read> Iterator for Framer<R> {
    type Item = Result<SbpFrame, FramerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_frame().transpose()
    }
}

#[cfg(test)]
#[path = "framer_tests.rs"]
mod tests;
