//! The error type shared by every fallible operation in Tincture. Pure numeric conversions never
//! fail: they clamp instead. Errors come from parsing strings, from channel validation on import
//! paths, and from nonsensical parameters such as a zero cluster count.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Everything that can go wrong when parsing, validating or configuring colors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input string is not a recognized hex code or `rgb(r, g, b)` function.
    #[error("invalid color format: {input:?}")]
    InvalidFormat {
        /// The offending input, as given.
        input: String,
    },

    /// A channel was supplied outside of [0, 255] to a path that validates instead of clamping.
    #[error("{channel} channel out of range: {value} (expected 0-255)")]
    OutOfRange {
        /// Which channel was rejected: "red", "green" or "blue".
        channel: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A parameter that must be positive or otherwise constrained was not.
    #[error("invalid parameter: {parameter} = {value}")]
    InvalidParameter {
        /// The name of the parameter.
        parameter: &'static str,
        /// The rejected value, rendered as text.
        value: String,
    },

    /// A cached LAB value does not match the RGB value it was stored alongside.
    #[error("cached LAB value does not match {hex}")]
    InconsistentLab {
        /// The hex code of the color whose LAB cache disagreed.
        hex: String,
    },

    /// A family table could not be loaded or failed validation.
    #[error("family table error: {message}")]
    Config {
        /// What went wrong.
        message: String,
    },
}

impl ColorError {
    /// Shorthand for an [`ColorError::InvalidFormat`] carrying the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        ColorError::InvalidFormat {
            input: input.into(),
        }
    }

    /// Shorthand for a [`ColorError::Config`] error.
    pub fn config(message: impl Into<String>) -> Self {
        ColorError::Config {
            message: message.into(),
        }
    }

    /// Whether a batch that skips bad items may keep going after this error. Configuration and
    /// parameter errors affect every item, so they are never skippable.
    pub fn is_item_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidFormat { .. }
                | ColorError::OutOfRange { .. }
                | ColorError::InconsistentLab { .. }
        )
    }
}

impl From<serde_json::Error> for ColorError {
    fn from(err: serde_json::Error) -> Self {
        ColorError::config(err.to_string())
    }
}

impl From<std::io::Error> for ColorError {
    fn from(err: std::io::Error) -> Self {
        ColorError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ColorError::invalid_format("#12");
        assert_eq!(err.to_string(), "invalid color format: \"#12\"");
        let err = ColorError::OutOfRange {
            channel: "green",
            value: 300,
        };
        assert_eq!(err.to_string(), "green channel out of range: 300 (expected 0-255)");
    }

    #[test]
    fn test_item_errors() {
        assert!(ColorError::invalid_format("x").is_item_error());
        assert!(!ColorError::config("bad table").is_item_error());
        assert!(!ColorError::InvalidParameter {
            parameter: "k",
            value: "0".to_string(),
        }
        .is_item_error());
    }
}
