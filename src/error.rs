//! Error types for sequence rendering.
//!
//! Joining a typed slice never fails. Errors only come from the edges of the
//! crate:
//!
//! - **Invalid arguments**: negative head/tail counts passed through the
//!   checked constructor [`JoinOptions::try_with_limits`](crate::JoinOptions::try_with_limits)
//! - **Unsupported types**: values handed to [`to_items`](crate::to_items) that
//!   are not a flat sequence of scalars
//! - **I/O errors**: failures while writing rendered output to a writer
//!
//! ## Examples
//!
//! ```rust
//! use seqjoin::{Error, JoinOptions};
//!
//! let result = JoinOptions::try_with_limits(-1, 3);
//! assert!(matches!(result, Err(Error::InvalidArgument { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument was outside its accepted range
    #[error("Invalid argument `{name}`: {value} (must be non-negative)")]
    InvalidArgument { name: &'static str, value: i64 },

    /// The value cannot be rendered as a flat sequence of items
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid argument error for a named parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqjoin::Error;
    ///
    /// let err = Error::invalid_argument("head", -2);
    /// assert!(err.to_string().contains("`head`"));
    /// ```
    pub fn invalid_argument(name: &'static str, value: i64) -> Self {
        Error::InvalidArgument { name, value }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
