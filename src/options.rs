//! Formatting policy for joined sequences.
//!
//! This module provides the types that control how a sequence is rendered:
//!
//! - [`JoinOptions`]: Main configuration struct, passed per call
//! - [`Delimiter`]: Separator inserted between adjacent items
//! - [`Strategy`]: How items are converted to text (output is identical either way)
//!
//! Defaults live on the struct rather than in module state, so every call
//! carries its own policy.
//!
//! ## Examples
//!
//! ```rust
//! use seqjoin::{join, Delimiter, JoinOptions};
//!
//! let options = JoinOptions::new().with_delimiter(Delimiter::Pipe).quoted();
//! assert_eq!(join(&["x", "y"], &options), "'x' | 'y'");
//!
//! let options = JoinOptions::prose();
//! assert_eq!(join(&[1, 2, 3], &options), "1, 2 and 3");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Separator inserted between adjacent rendered items.
///
/// # Examples
///
/// ```rust
/// use seqjoin::Delimiter;
///
/// assert_eq!(Delimiter::CommaSpace.as_str(), ", ");
/// assert_eq!(Delimiter::Pipe.as_str(), " | ");
/// assert_eq!(Delimiter::Custom(" / ".to_string()).as_str(), " / ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    #[default]
    CommaSpace,
    Comma,
    Semicolon,
    Pipe,
    Tab,
    Newline,
    Custom(String),
}

impl Delimiter {
    /// Returns the literal separator text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::CommaSpace => ", ",
            Delimiter::Comma => ",",
            Delimiter::Semicolon => "; ",
            Delimiter::Pipe => " | ",
            Delimiter::Tab => "\t",
            Delimiter::Newline => "\n",
            Delimiter::Custom(s) => s,
        }
    }
}

impl From<&str> for Delimiter {
    fn from(s: &str) -> Self {
        match s {
            ", " => Delimiter::CommaSpace,
            "," => Delimiter::Comma,
            "; " => Delimiter::Semicolon,
            " | " => Delimiter::Pipe,
            "\t" => Delimiter::Tab,
            "\n" => Delimiter::Newline,
            other => Delimiter::Custom(other.to_string()),
        }
    }
}

/// How items are converted to their display text.
///
/// Both strategies produce byte-identical output; the choice only affects
/// allocation behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Render every item to a `String`, then join the rendered parts.
    #[default]
    Bulk,
    /// Write each item straight into a single output buffer.
    Explicit,
}

/// Per-call formatting policy.
///
/// `head` and `tail` are only consulted by
/// [`join_truncated`](crate::join_truncated); `conjunction` is only consulted
/// by [`join`](crate::join).
///
/// The struct is serde-enabled so it can be embedded in a caller's own
/// configuration. Missing fields take their defaults.
///
/// # Examples
///
/// ```rust
/// use seqjoin::{JoinOptions, Strategy};
///
/// let options = JoinOptions::new()
///     .with_limits(3, 2)
///     .with_strategy(Strategy::Explicit)
///     .quoted();
/// assert_eq!(options.head, 3);
/// assert_eq!(options.tail, 2);
/// assert!(options.quoted);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinOptions {
    pub delimiter: Delimiter,
    pub quoted: bool,
    pub strategy: Strategy,
    pub conjunction: bool,
    pub head: usize,
    pub tail: usize,
}

impl Default for JoinOptions {
    fn default() -> Self {
        JoinOptions {
            delimiter: Delimiter::default(),
            quoted: false,
            strategy: Strategy::default(),
            conjunction: false,
            head: 5,
            tail: 3,
        }
    }
}

impl JoinOptions {
    /// Creates default options (`", "` delimiter, unquoted, no conjunction,
    /// head 5, tail 3).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqjoin::JoinOptions;
    ///
    /// let options = JoinOptions::new();
    /// assert_eq!(options.delimiter.as_str(), ", ");
    /// assert_eq!((options.head, options.tail), (5, 3));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that read as an English list ("1, 2 and 3").
    #[must_use]
    pub fn prose() -> Self {
        JoinOptions {
            conjunction: true,
            ..Default::default()
        }
    }

    /// Creates default options with head/tail counts supplied as signed
    /// integers, failing on negative values instead of clamping them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqjoin::JoinOptions;
    ///
    /// let options = JoinOptions::try_with_limits(3, 2).unwrap();
    /// assert_eq!((options.head, options.tail), (3, 2));
    /// assert!(JoinOptions::try_with_limits(3, -2).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the first negative count.
    pub fn try_with_limits(head: i64, tail: i64) -> Result<Self> {
        let head = checked_count("head", head)?;
        let tail = checked_count("tail", tail)?;
        Ok(Self::default().with_limits(head, tail))
    }

    /// Sets the delimiter placed between items.
    ///
    /// Accepts a [`Delimiter`] or any `&str`.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Wraps every item in quotes.
    #[must_use]
    pub fn quoted(self) -> Self {
        self.with_quoted(true)
    }

    #[must_use]
    pub fn with_quoted(mut self, quoted: bool) -> Self {
        self.quoted = quoted;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Inserts "and" before the final item when there are two or more items.
    #[must_use]
    pub fn with_conjunction(mut self, conjunction: bool) -> Self {
        self.conjunction = conjunction;
        self
    }

    #[must_use]
    pub fn with_head(mut self, head: usize) -> Self {
        self.head = head;
        self
    }

    #[must_use]
    pub fn with_tail(mut self, tail: usize) -> Self {
        self.tail = tail;
        self
    }

    /// Sets both truncation counts.
    #[must_use]
    pub fn with_limits(self, head: usize, tail: usize) -> Self {
        self.with_head(head).with_tail(tail)
    }
}

fn checked_count(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::invalid_argument(name, value))
}
