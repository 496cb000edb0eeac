// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prefix rendering.
//!
//! Every emitted line starts with a prefix that depends on the message level and,
//! through debug mode (a threshold of debug or above), on the threshold:
//!
//! | Case                            | Layout                                                          |
//! |---------------------------------|-----------------------------------------------------------------|
//! | unnamed level below debug       | alert color, `????:` padded to 8, reset, one space              |
//! | debug mode                      | `color LABEL reset`, then `[U=euid,P=pid]` (19) and `caller()` (30) |
//! | named level, threshold < debug  | `color LABEL: reset` padded to 8 columns, then one space        |
//!
//! Color segments become empty strings when color is disabled, except for the
//! unknown marker which is always highlighted.  Padding counts `char`s so the
//! zero-width escape codes never shift the columns that follow.

use crate::level::{Level, UNKNOWN_LABEL};
use std::fmt::{Display, Formatter};

pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const RESET: &str = "\x1b[0m";
/// Bold red, used for the unknown-level marker regardless of the color setting.
pub const ALERT: &str = "\x1b[1;31m";

pub(crate) const LABEL_WIDTH: usize = 8;
pub(crate) const IDENTITY_WIDTH: usize = 19;
pub(crate) const CALLER_WIDTH: usize = 30;

/// Name the logging macros generate their marker function under.
const MARKER_NAME: &str = "__sylog_marker";
const CLOSURE_SEGMENT: &str = "{{closure}}";

/**
The function that issued a log call.

Rust has no runtime stack introspection that is reliable in release builds, so
the emission macros capture the enclosing function's name at compile time and
pass it down explicitly.  Code calling [`Logger::emit`](crate::Logger::emit)
directly builds one with [`Caller::new`].
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caller {
    name: &'static str,
}

impl Caller {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// A caller whose name is not known.
    pub const fn unknown() -> Self {
        Self { name: "???" }
    }

    /**
    Builds a caller from the type name of a marker function nested inside it.

    `my_crate::jobs::run::__sylog_marker` becomes `run`.  Closure segments are
    skipped so a log call inside a closure reports the enclosing function.
    */
    pub fn from_type_name(path: &'static str) -> Self {
        let mut path = path.strip_suffix(MARKER_NAME).unwrap_or(path);
        path = path.trim_end_matches("::");
        while let Some(rest) = path.strip_suffix(CLOSURE_SEGMENT) {
            path = rest.trim_end_matches("::");
        }
        let name = path.rsplit("::").next().unwrap_or(path);
        if name.is_empty() {
            return Self::unknown();
        }
        Self { name }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for Caller {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Display for Caller {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}()", self.name)
    }
}

/// Left-justifies `s` in a field of `width` characters.  Longer strings are kept whole.
pub fn pad(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width.max(s.len()));
    push_padded(&mut out, s, width);
    out
}

fn push_padded(out: &mut String, s: &str, width: usize) {
    out.push_str(s);
    let len = s.chars().count();
    for _ in len..width {
        out.push(' ');
    }
}

/// The color code of a level, before the color setting is applied.
pub(crate) fn level_color(level: Level) -> &'static str {
    match level {
        Level::FATAL | Level::ERROR => RED,
        Level::WARN => YELLOW,
        Level::INFO | Level::VERBOSE | Level::VERBOSE2 | Level::VERBOSE3 => BLUE,
        _ => RESET,
    }
}

/// Effective user id and process id, read fresh on every call.
fn process_identity() -> (u32, u32) {
    (effective_uid(), std::process::id())
}

#[cfg(unix)]
fn effective_uid() -> u32 {
    rustix::process::geteuid().as_raw()
}

#[cfg(not(unix))]
fn effective_uid() -> u32 {
    0
}

pub(crate) fn render(
    level: Level,
    threshold: i32,
    color_enabled: bool,
    caller: &Caller,
) -> String {
    if !level.is_named() && level < Level::DEBUG {
        return render_unknown();
    }
    if threshold >= Level::DEBUG.value() {
        return render_debug(level, color_enabled, caller);
    }
    match level.label() {
        Some(label) => render_standard(level, label, color_enabled),
        None => render_unknown(),
    }
}

fn render_unknown() -> String {
    let mut out = String::with_capacity(32);
    out.push_str(ALERT);
    push_padded(&mut out, &format!("{UNKNOWN_LABEL}:"), LABEL_WIDTH);
    out.push_str(RESET);
    out.push(' ');
    out
}

fn render_standard(level: Level, label: &str, color_enabled: bool) -> String {
    let (color, reset) = color_pair(level, color_enabled);
    let mut out = String::with_capacity(32);
    out.push_str(color);
    push_padded(&mut out, &format!("{label}:"), LABEL_WIDTH);
    out.push_str(reset);
    out.push(' ');
    out
}

fn render_debug(level: Level, color_enabled: bool, caller: &Caller) -> String {
    let (color, reset) = color_pair(level, color_enabled);
    let (uid, pid) = process_identity();
    let mut out = String::with_capacity(96);
    out.push_str(color);
    push_padded(&mut out, &level.to_string(), LABEL_WIDTH);
    out.push_str(reset);
    push_padded(&mut out, &format!("[U={uid},P={pid}]"), IDENTITY_WIDTH);
    push_padded(&mut out, &caller.to_string(), CALLER_WIDTH);
    out
}

fn color_pair(level: Level, color_enabled: bool) -> (&'static str, &'static str) {
    if color_enabled {
        (level_color(level), RESET)
    } else {
        ("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: i32 = 1;
    const DEBUG: i32 = 5;

    fn identity() -> String {
        let (uid, pid) = process_identity();
        format!("[U={uid},P={pid}]")
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("INFO:", 8), "INFO:   ");
        assert_eq!(pad("WARNING:", 8), "WARNING:");
        assert_eq!(pad("VERBOSE2:", 8), "VERBOSE2:");
        assert_eq!(pad("", 3), "   ");
        // counts characters, not bytes
        assert_eq!(pad("é", 3).chars().count(), 3);
    }

    #[test]
    fn test_caller_from_type_name() {
        assert_eq!(
            Caller::from_type_name("my_crate::jobs::run::__sylog_marker").name(),
            "run"
        );
        assert_eq!(
            Caller::from_type_name("my_crate::main::{{closure}}::__sylog_marker").name(),
            "main"
        );
        assert_eq!(
            Caller::from_type_name("my_crate::a::{{closure}}::{{closure}}::__sylog_marker").name(),
            "a"
        );
        assert_eq!(
            Caller::from_type_name("my_crate::Worker<u8>::start::__sylog_marker").name(),
            "start"
        );
        assert_eq!(Caller::from_type_name("__sylog_marker"), Caller::unknown());
        assert_eq!(Caller::from_type_name("plain").name(), "plain");
    }

    #[test]
    fn test_caller_display() {
        assert_eq!(Caller::new("launch").to_string(), "launch()");
        assert_eq!(Caller::default().to_string(), "???()");
    }

    #[test]
    fn test_standard_color() {
        let caller = Caller::unknown();
        assert_eq!(render(Level::FATAL, QUIET, true, &caller), "\x1b[31mFATAL:  \x1b[0m ");
        assert_eq!(render(Level::ERROR, QUIET, true, &caller), "\x1b[31mERROR:  \x1b[0m ");
        assert_eq!(render(Level::WARN, QUIET, true, &caller), "\x1b[33mWARNING:\x1b[0m ");
        assert_eq!(render(Level::INFO, QUIET, true, &caller), "\x1b[34mINFO:   \x1b[0m ");
        assert_eq!(render(Level::VERBOSE, QUIET, true, &caller), "\x1b[34mVERBOSE:\x1b[0m ");
    }

    #[test]
    fn test_standard_no_color() {
        let caller = Caller::unknown();
        assert_eq!(render(Level::FATAL, QUIET, false, &caller), "FATAL:   ");
        assert_eq!(render(Level::ERROR, QUIET, false, &caller), "ERROR:   ");
        assert_eq!(render(Level::WARN, QUIET, false, &caller), "WARNING: ");
        assert_eq!(render(Level::INFO, QUIET, false, &caller), "INFO:    ");
        assert_eq!(render(Level::VERBOSE3, QUIET, false, &caller), "VERBOSE3: ");
    }

    #[test]
    fn test_unknown_ignores_color_setting() {
        let expected = "\x1b[1;31m????:   \x1b[0m ";
        for value in [-5, -10, -1, 0, i32::MIN] {
            let level = Level::new(value);
            assert_eq!(render(level, QUIET, true, &Caller::unknown()), expected);
            assert_eq!(render(level, QUIET, false, &Caller::unknown()), expected);
        }
    }

    #[test]
    fn test_debug_color() {
        let caller = Caller::new("launch");
        let expected = format!(
            "\x1b[0mDEBUG   \x1b[0m{:<19}{:<30}",
            identity(),
            "launch()"
        );
        assert_eq!(render(Level::DEBUG, DEBUG, true, &caller), expected);
    }

    #[test]
    fn test_debug_no_color() {
        let caller = Caller::new("launch");
        let expected = format!("DEBUG   {:<19}{:<30}", identity(), "launch()");
        assert_eq!(render(Level::DEBUG, DEBUG, false, &caller), expected);
    }

    #[test]
    fn test_above_debug_uses_debug_layout() {
        let caller = Caller::new("launch");
        let expected = format!("????    {:<19}{:<30}", identity(), "launch()");
        assert_eq!(render(Level::new(9), DEBUG, false, &caller), expected);
    }

    #[test]
    fn test_debug_mode_applies_to_every_named_level() {
        let caller = Caller::new("launch");
        for level in [Level::FATAL, Level::WARN, Level::INFO, Level::VERBOSE] {
            let expected =
                format!("{:<8}{:<19}{:<30}", level.to_string(), identity(), "launch()");
            assert_eq!(render(level, DEBUG, false, &caller), expected);
        }
        let expected = format!(
            "\x1b[33mWARNING \x1b[0m{:<19}{:<30}",
            identity(),
            "launch()"
        );
        assert_eq!(render(Level::WARN, DEBUG, true, &caller), expected);
    }

    #[test]
    fn test_debug_level_outside_debug_mode() {
        assert_eq!(render(Level::DEBUG, QUIET, false, &Caller::unknown()), "DEBUG:   ");
        let above = render(Level::new(9), QUIET, false, &Caller::unknown());
        assert_eq!(above, "\x1b[1;31m????:   \x1b[0m ");
    }

    #[test]
    fn test_unknown_in_debug_mode() {
        let expected = "\x1b[1;31m????:   \x1b[0m ";
        for value in [-5, -1, 0] {
            assert_eq!(render(Level::new(value), DEBUG, false, &Caller::unknown()), expected);
        }
    }

    #[test]
    fn test_level_color() {
        assert_eq!(level_color(Level::FATAL), RED);
        assert_eq!(level_color(Level::WARN), YELLOW);
        assert_eq!(level_color(Level::VERBOSE2), BLUE);
        assert_eq!(level_color(Level::DEBUG), RESET);
    }
}
