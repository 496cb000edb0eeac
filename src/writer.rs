// SPDX-License-Identifier: MIT OR Apache-2.0
use std::io::{self, Write};

/**
The stream log messages go to.

Obtained from [`Logger::writer`](crate::Logger::writer), which picks
[`Writer::Discard`] when logging is fully disabled so callers can write
diagnostics without repeating the threshold check.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Writer {
    /// The process's standard error stream.
    Stderr,
    /// Accepts and drops everything.
    Discard,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Copy/PartialEq/Eq/Hash: derived, the writer is only a choice of stream
// - Write: forwards to a fresh stderr handle, so no lock outlives a call
// - Default: NOT implemented, the stream depends on the current threshold

impl Writer {
    pub fn is_discard(&self) -> bool {
        matches!(self, Writer::Discard)
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Writer::Stderr => io::stderr().write(buf),
            Writer::Discard => Ok(buf.len()),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Writer::Stderr => io::stderr().lock().write_all(buf),
            Writer::Discard => Ok(()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Writer::Stderr => io::stderr().flush(),
            Writer::Discard => Ok(()),
        }
    }
}
