// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Returned when a string cannot be interpreted as a [`Level`](crate::Level).
///
/// This is the only error in the crate; none of the logging operations fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLevelError {
    #[error("message level is empty")]
    Empty,
    #[error("unrecognized message level `{0}`")]
    Unrecognized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ParseLevelError::Empty.to_string(), "message level is empty");
        assert_eq!(
            ParseLevelError::Unrecognized("loud".to_string()).to_string(),
            "unrecognized message level `loud`"
        );
    }
}
