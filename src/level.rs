// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message levels.
//!
//! A [`Level`] is a signed integer rank.  The more negative the value, the more
//! severe the message; the more positive, the more verbose.  A message is written
//! when its value is less than or equal to the current threshold.
//!
//! ```
//! use sylog::Level;
//!
//! assert!(Level::ERROR < Level::WARN);
//! assert!(Level::INFO < Level::DEBUG);
//! assert_eq!(Level::VERBOSE.to_string(), "VERBOSE");
//! ```

use crate::error::ParseLevelError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Label used for any value that is not a named level.
pub(crate) const UNKNOWN_LABEL: &str = "????";

/// A message level.
///
/// Levels are totally ordered by their integer value.  The named levels are
/// provided as associated constants; any other integer is a valid (unnamed) level,
/// which is how thresholds such as `0` ("warnings only") are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    /// Unrecoverable error; emitting at this level terminates the process.
    pub const FATAL: Level = Level(-4);
    pub const ERROR: Level = Level(-3);
    pub const WARN: Level = Level(-2);
    pub const INFO: Level = Level(1);
    pub const VERBOSE: Level = Level(2);
    pub const VERBOSE2: Level = Level(3);
    pub const VERBOSE3: Level = Level(4);
    /// Most verbose named level.  Messages at this level carry caller and process identity.
    pub const DEBUG: Level = Level(5);

    /// Every named level, most severe first.
    pub const NAMED: [Level; 8] = [
        Level::FATAL,
        Level::ERROR,
        Level::WARN,
        Level::INFO,
        Level::VERBOSE,
        Level::VERBOSE2,
        Level::VERBOSE3,
        Level::DEBUG,
    ];

    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// The upper-case label of a named level, or `None` for unnamed values.
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            -4 => Some("FATAL"),
            -3 => Some("ERROR"),
            -2 => Some("WARNING"),
            1 => Some("INFO"),
            2 => Some("VERBOSE"),
            3 => Some("VERBOSE2"),
            4 => Some("VERBOSE3"),
            5 => Some("DEBUG"),
            _ => None,
        }
    }

    pub const fn is_named(self) -> bool {
        self.label().is_some()
    }
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Copy/Ord/Hash: derived, a level is a plain integer rank
// - Display: the label, or "????" for unnamed values
// - From/Into: lossless conversion to and from i32
// - FromStr: integers or case-insensitive level names
// - Default: NOT implemented, the default threshold lives in `env`

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label().unwrap_or(UNKNOWN_LABEL))
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses either an integer rank (`"-3"`, `"5"`) or a level name (`"error"`, `"Debug"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseLevelError::Empty);
        }
        if let Ok(value) = s.parse::<i32>() {
            return Ok(Level(value));
        }
        match s.to_ascii_lowercase().as_str() {
            "fatal" => Ok(Level::FATAL),
            "error" => Ok(Level::ERROR),
            "warn" | "warning" => Ok(Level::WARN),
            "info" => Ok(Level::INFO),
            "verbose" | "verbose1" => Ok(Level::VERBOSE),
            "verbose2" => Ok(Level::VERBOSE2),
            "verbose3" => Ok(Level::VERBOSE3),
            "debug" => Ok(Level::DEBUG),
            _ => Err(ParseLevelError::Unrecognized(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        let values: Vec<i32> = Level::NAMED.iter().map(|l| l.value()).collect();
        assert_eq!(values, vec![-4, -3, -2, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_total_order() {
        for pair in Level::NAMED.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
        // the silent slot sits between warn and info
        assert!(Level::WARN < Level::new(0));
        assert!(Level::new(0) < Level::INFO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::FATAL.to_string(), "FATAL");
        assert_eq!(Level::WARN.to_string(), "WARNING");
        assert_eq!(Level::VERBOSE3.to_string(), "VERBOSE3");
        assert_eq!(Level::DEBUG.to_string(), "DEBUG");
        assert_eq!(Level::new(-1).to_string(), "????");
        assert_eq!(Level::new(0).to_string(), "????");
        assert_eq!(Level::new(-10).to_string(), "????");
    }

    #[test]
    fn test_is_named() {
        assert!(Level::NAMED.iter().all(|l| l.is_named()));
        assert!(!Level::new(-1).is_named());
        assert!(!Level::new(6).is_named());
    }

    #[test]
    fn test_parse() {
        assert_eq!("-3".parse::<Level>(), Ok(Level::ERROR));
        assert_eq!(" 5 ".parse::<Level>(), Ok(Level::DEBUG));
        assert_eq!("-10".parse::<Level>(), Ok(Level::new(-10)));
        assert_eq!("Warning".parse::<Level>(), Ok(Level::WARN));
        assert_eq!("warn".parse::<Level>(), Ok(Level::WARN));
        assert_eq!("VERBOSE2".parse::<Level>(), Ok(Level::VERBOSE2));
        assert_eq!("".parse::<Level>(), Err(ParseLevelError::Empty));
        assert_eq!(
            "loud".parse::<Level>(),
            Err(ParseLevelError::Unrecognized("loud".to_string()))
        );
    }

    #[test]
    fn test_i32_conversion() {
        assert_eq!(i32::from(Level::VERBOSE), 2);
        assert_eq!(Level::from(5), Level::DEBUG);
    }
}
