// SPDX-License-Identifier: MIT OR Apache-2.0

//! The environment contract.
//!
//! The threshold of the global logger is seeded from [`MESSAGE_LEVEL_ENV`] the
//! first time it is used.  [`env_var_string`] renders the current threshold in
//! `NAME=value` form so it can be handed to a child process:
//!
//! ```
//! use std::process::Command;
//!
//! let entry = sylog::env_var_string();
//! let (name, value) = entry.split_once('=').unwrap();
//! let mut child = Command::new("true");
//! child.env(name, value);
//! ```
//!
//! [`env_var_string`]: crate::env_var_string

use crate::error::ParseLevelError;
use crate::level::Level;

/// Name of the variable holding the message level.
pub const MESSAGE_LEVEL_ENV: &str = "SINGULARITY_MESSAGELEVEL";

/// Threshold used when the variable is unset or cannot be parsed.
pub const DEFAULT_LEVEL: i32 = Level::INFO.value();

/// Parses a threshold, accepting an integer or a level name.
pub fn parse_level(value: &str) -> Result<i32, ParseLevelError> {
    value.parse::<Level>().map(Level::value)
}

/// Reads the threshold from the environment, falling back to [`DEFAULT_LEVEL`].
pub fn threshold_from_env() -> i32 {
    threshold_from(std::env::var(MESSAGE_LEVEL_ENV).ok().as_deref())
}

fn threshold_from(value: Option<&str>) -> i32 {
    value
        .and_then(|v| parse_level(v).ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Renders `SINGULARITY_MESSAGELEVEL=<threshold>`.
pub fn render(threshold: i32) -> String {
    format!("{MESSAGE_LEVEL_ENV}={threshold}")
}
