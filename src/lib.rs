//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# sylog

sylog is a leveled, process-wide logging facility.  Messages are classified by
severity, prefixed with a level label (optionally colored, and with a debug threshold
annotated with the effective uid, pid and calling function) and written to
stderr when they pass a single global verbosity threshold.

It is deliberately small: one threshold, one color switch, one stream.  There
are no structured fields, no pluggable sinks and no rotation.

# Levels

| Level      | Value | Macro          |
|------------|-------|----------------|
| `FATAL`    | -4    | [`fatalf!`]    |
| `ERROR`    | -3    | [`errorf!`]    |
| `WARN`     | -2    | [`warningf!`]  |
| *(silent)* | 0     |                |
| `INFO`     | 1     | [`infof!`]     |
| `VERBOSE`  | 2     | [`verbosef!`]  |
| `VERBOSE2` | 3     | [`verbose2f!`] |
| `VERBOSE3` | 4     | [`verbose3f!`] |
| `DEBUG`    | 5     | [`debugf!`]    |

A message is written when its value is less than or equal to the threshold.
Setting the threshold to `0` keeps errors and warnings and drops everything
informational; anything below `-4` turns logging off entirely.

# Configuration

The threshold starts out from the `SINGULARITY_MESSAGELEVEL` environment
variable (an integer or a level name), defaulting to `INFO`.  It can be changed
at any time:

```rust
sylog::set_level(sylog::Level::DEBUG.value());
sylog::disable_color();
sylog::debugf!("mounting {} at {}", "/dev/loop0", "/mnt");
```

and forwarded to child processes with [`env_var_string`].

# Fatal messages

[`fatalf!`] writes its message and then exits the process with status 255.
It is the only part of the crate that terminates the process; every other
macro returns normally, and no operation returns an error.
*/

mod error;
mod level;
mod logger;
mod macros;
mod prefix;
mod writer;
pub mod env;
pub mod global_logger;

pub use error::ParseLevelError;
pub use global_logger::{
    disable_color, enabled, env_var_string, get_level, prefix, set_level, writer,
};
pub use level::Level;
pub use logger::{FATAL_EXIT_CODE, Logger};
pub use prefix::{ALERT, BLUE, Caller, RED, RESET, YELLOW, pad};
pub use writer::Writer;

#[doc(hidden)]
pub mod hidden {
    pub use crate::logger::fatal_exit;
}
