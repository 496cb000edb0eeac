// SPDX-License-Identifier: MIT OR Apache-2.0

//! The level filter and formatter.
//!
//! A [`Logger`] holds the two pieces of logging state, the verbosity threshold and
//! the color flag, and performs the gate-then-format-then-write dispatch.  The
//! process-wide instance lives in [`global_logger`](crate::global_logger); tests
//! and embedders can build isolated instances with [`Logger::new`].
//!
//! ```
//! use sylog::{Caller, Level, Logger};
//!
//! let logger = Logger::new(Level::INFO.value());
//! logger.disable_color();
//!
//! let mut out = Vec::new();
//! logger.write_to(&mut out, Level::INFO, &Caller::new("main"), format_args!("ready"));
//! logger.write_to(&mut out, Level::VERBOSE, &Caller::new("main"), format_args!("dropped"));
//! assert_eq!(String::from_utf8(out).unwrap(), "INFO:    ready\n");
//! ```

use crate::env;
use crate::level::Level;
use crate::prefix::{self, Caller};
use crate::writer::Writer;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

/// Status the process exits with after a fatal message.
pub const FATAL_EXIT_CODE: i32 = 255;

/**
Logging state: the verbosity threshold and whether prefixes are colored.

Both fields are atomics, so a `Logger` can be shared freely.  Configuration is
expected to happen near startup; a `set_level` racing an emission may or may not
apply to that emission.
*/
#[derive(Debug)]
pub struct Logger {
    threshold: AtomicI32,
    color_enabled: AtomicBool,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived
// - Default: the default threshold with color on
// - Clone: NOT implemented, two handles to "the" logger state would drift apart
// - PartialEq/Eq/Hash: NOT implemented, state is mutable behind &self

impl Default for Logger {
    fn default() -> Self {
        Self::new(env::DEFAULT_LEVEL)
    }
}

impl Logger {
    /// Creates a logger with the given threshold and color enabled.
    pub const fn new(threshold: i32) -> Self {
        Self {
            threshold: AtomicI32::new(threshold),
            color_enabled: AtomicBool::new(true),
        }
    }

    /// Creates a logger seeded from [`MESSAGE_LEVEL_ENV`](crate::env::MESSAGE_LEVEL_ENV).
    pub fn from_env() -> Self {
        Self::new(env::threshold_from_env())
    }

    /// Sets the threshold.  Any integer is accepted.
    pub fn set_level(&self, threshold: i32) {
        self.threshold.store(threshold, Ordering::Relaxed);
    }

    pub fn level(&self) -> i32 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Whether a message at `level` would be written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.value() <= self.level()
    }

    /// Turns colored prefixes off for good.
    pub fn disable_color(&self) {
        self.color_enabled.store(false, Ordering::Relaxed);
    }

    pub fn color_enabled(&self) -> bool {
        self.color_enabled.load(Ordering::Relaxed)
    }

    /// The current threshold as `SINGULARITY_MESSAGELEVEL=<n>`.
    pub fn env_var_string(&self) -> String {
        env::render(self.level())
    }

    /// Renders the prefix for `level`, as it would appear on an emitted line.
    ///
    /// With a threshold of debug or above every named level gets the debug
    /// layout, carrying the process identity and `caller`.
    pub fn prefix(&self, level: Level, caller: &Caller) -> String {
        prefix::render(level, self.level(), self.color_enabled(), caller)
    }

    /// The stream matching the current threshold: discard when even fatal
    /// messages are filtered, stderr otherwise.
    pub fn writer(&self) -> Writer {
        if self.level() < Level::FATAL.value() {
            Writer::Discard
        } else {
            Writer::Stderr
        }
    }

    /**
    Writes one line to `out` if `level` passes the threshold.

    Nothing is formatted for filtered messages.  The prefix, message and newline
    are assembled first and handed to `out` in a single `write_all`.  Write errors
    are dropped; logging never fails its caller.
    */
    pub fn write_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
        level: Level,
        caller: &Caller,
        args: fmt::Arguments<'_>,
    ) {
        if let Some(line) = self.format_line(level, caller, args) {
            let _ = out.write_all(line.as_bytes());
        }
    }

    /// Writes one line to stderr if `level` passes the threshold.
    ///
    /// stderr is locked only for the final write, after formatting.
    pub fn emit(&self, level: Level, caller: &Caller, args: fmt::Arguments<'_>) {
        if let Some(line) = self.format_line(level, caller, args) {
            let _ = io::stderr().lock().write_all(line.as_bytes());
        }
    }

    fn format_line(
        &self,
        level: Level,
        caller: &Caller,
        args: fmt::Arguments<'_>,
    ) -> Option<String> {
        if !self.enabled(level) {
            return None;
        }
        let mut line = self.prefix(level, caller);
        // a Display impl that errors leaves its output truncated
        let _ = line.write_fmt(args);
        line.push('\n');
        Some(line)
    }
}

/// Flushes stderr and terminates the process with [`FATAL_EXIT_CODE`].
///
/// Only [`fatalf!`](crate::fatalf) calls this.
pub fn fatal_exit() -> ! {
    let _ = io::stderr().flush();
    std::process::exit(FATAL_EXIT_CODE)
}
