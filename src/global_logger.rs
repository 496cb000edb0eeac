// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide logger.
//!
//! Every emission macro goes through a single [`Logger`] that is created on first
//! use, with its threshold seeded from
//! [`MESSAGE_LEVEL_ENV`](crate::env::MESSAGE_LEVEL_ENV).  The free functions in
//! this module are thin forwards to that instance and are re-exported at the
//! crate root.
//!
//! # Examples
//!
//! ```
//! use sylog::Level;
//!
//! sylog::set_level(Level::VERBOSE.value());
//! assert_eq!(sylog::get_level(), 2);
//! assert!(sylog::enabled(Level::INFO));
//! assert!(!sylog::enabled(Level::DEBUG));
//! ```
//!
//! # Implementation Notes
//!
//! The instance is stored in a `OnceLock` and never replaced, so the reference
//! returned by [`global_logger`] is valid for the life of the process.  Its state
//! is atomic; configure it near startup, since a `set_level` racing an emission
//! on another thread may or may not apply to that emission.

use crate::level::Level;
use crate::logger::Logger;
use crate::prefix::Caller;
use crate::writer::Writer;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger, initializing it from the environment if needed.
pub fn global_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::from_env)
}

pub fn set_level(threshold: i32) {
    global_logger().set_level(threshold);
}

pub fn get_level() -> i32 {
    global_logger().level()
}

pub fn enabled(level: Level) -> bool {
    global_logger().enabled(level)
}

/// Disables colored prefixes for the rest of the process.
pub fn disable_color() {
    global_logger().disable_color();
}

/// `SINGULARITY_MESSAGELEVEL=<threshold>` for the current threshold.
pub fn env_var_string() -> String {
    global_logger().env_var_string()
}

pub fn prefix(level: Level, caller: &Caller) -> String {
    global_logger().prefix(level, caller)
}

/// The stream consistent with the current threshold.
///
/// ```
/// use std::io::Write;
///
/// let mut out = sylog::writer();
/// writeln!(out, "diagnostic detail").unwrap();
/// ```
pub fn writer() -> Writer {
    global_logger().writer()
}
