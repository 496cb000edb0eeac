// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emission macros.
//!
//! One macro per named level, each taking [`format!`]-style arguments:
//!
//! | Macro          | Level      |
//! |----------------|------------|
//! | [`fatalf!`]    | `FATAL`    |
//! | [`errorf!`]    | `ERROR`    |
//! | [`warningf!`]  | `WARN`     |
//! | [`infof!`]     | `INFO`     |
//! | [`verbosef!`]  | `VERBOSE`  |
//! | [`verbose2f!`] | `VERBOSE2` |
//! | [`verbose3f!`] | `VERBOSE3` |
//! | [`debugf!`]    | `DEBUG`    |
//!
//! All of them check the threshold of the global logger before evaluating the
//! format arguments.  [`fatalf!`] is the only one that does not return: it
//! terminates the process after writing.
//!
//! ```
//! sylog::set_level(sylog::Level::VERBOSE.value());
//! sylog::infof!("pulled {} layers", 3);
//! sylog::debugf!("not evaluated: {}", expensive());
//! # fn expensive() -> u32 { unreachable!() }
//! ```

/// The name of the enclosing function, as a [`Caller`](crate::Caller).
///
/// Expands to a nested marker function whose type name carries the path of the
/// function it was declared in.
#[doc(hidden)]
#[macro_export]
macro_rules! __caller {
    () => {{
        fn __sylog_marker() {}
        $crate::Caller::from_type_name(::std::any::type_name_of_val(&__sylog_marker))
    }};
}

/// Logs at an arbitrary [`Level`](crate::Level) through the global logger.
///
/// ```
/// sylog::log_at!(sylog::Level::WARN, "disk {}% full", 91);
/// ```
#[macro_export]
macro_rules! log_at {
    ($level:expr, $($arg:tt)+) => {{
        let level: $crate::Level = $level;
        let logger = $crate::global_logger::global_logger();
        if logger.enabled(level) {
            logger.emit(level, &$crate::__caller!(), ::std::format_args!($($arg)+));
        }
    }};
}

/// Returns whether a message at the given [`Level`](crate::Level) would be written.
///
/// ```
/// sylog::set_level(0);
/// assert!(sylog::level_enabled!(sylog::Level::WARN));
/// assert!(!sylog::level_enabled!(sylog::Level::INFO));
/// ```
#[macro_export]
macro_rules! level_enabled {
    ($level:expr) => {
        $crate::global_logger::enabled($level)
    };
}

/// Logs at `FATAL`, then terminates the process with status 255.
///
/// The message is written only if the threshold allows it, but the process
/// exits either way.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {{
        $crate::log_at!($crate::Level::FATAL, $($arg)+);
        $crate::hidden::fatal_exit()
    }};
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::ERROR, $($arg)+)
    };
}

#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::WARN, $($arg)+)
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::INFO, $($arg)+)
    };
}

#[macro_export]
macro_rules! verbosef {
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::VERBOSE, $($arg)+)
    };
}

#[macro_export]
macro_rules! verbose2f {
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::VERBOSE2, $($arg)+)
    };
}

#[macro_export]
macro_rules! verbose3f {
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::VERBOSE3, $($arg)+)
    };
}

/// Logs at `DEBUG`.  The prefix carries the effective uid, pid and calling function.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Level::DEBUG, $($arg)+)
    };
}
