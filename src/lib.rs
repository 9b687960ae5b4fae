//! # seqjoin
//!
//! Render ordered sequences of values into compact, human-readable strings
//! for diagnostics, error messages and log output.
//!
//! ## What it does
//!
//! Library code often needs to describe a collection of values ("allowed
//! values are 1, 2 and 3") without hand-rolling the formatting at every call
//! site. `seqjoin` provides two renderers:
//!
//! - **Joiner** ([`join`]): joins every item, with optional quoting, a
//!   configurable delimiter and an English "and" before the last item
//! - **Truncated joiner** ([`join_truncated`]): shows only the first `head`
//!   and last `tail` items of long sequences, separated by `...`
//!
//! Both are pure functions of their input and a [`JoinOptions`] value.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqjoin::{join, join_truncated, JoinOptions};
//!
//! assert_eq!(join(&[1, 2, 3], &JoinOptions::new()), "1, 2, 3");
//! assert_eq!(join(&[1, 2, 3], &JoinOptions::prose()), "1, 2 and 3");
//! assert_eq!(join(&["a", "b"], &JoinOptions::new().quoted()), "'a', 'b'");
//!
//! let letters = ["a", "b", "c", "d", "e", "f", "g"];
//! let options = JoinOptions::new().with_limits(3, 2);
//! assert_eq!(join_truncated(&letters, &options), "a, b, c, ..., f, g");
//! ```
//!
//! ### Embedding in messages
//!
//! ```rust
//! use seqjoin::JoinOptions;
//!
//! let options = JoinOptions::prose().quoted();
//! let msg = format!("expected one of {}", options.display(&["GET", "PUT", "POST"]));
//! assert_eq!(msg, "expected one of 'GET', 'PUT' and 'POST'");
//! ```
//!
//! ### Mixed values
//!
//! Sequences of different types can be built with [`items!`] or materialized
//! from any serde sequence with [`to_items`]:
//!
//! ```rust
//! use seqjoin::{join_serialize, JoinOptions};
//!
//! let text = join_serialize(&(1, "x", 2.5), &JoinOptions::new()).unwrap();
//! assert_eq!(text, "1, x, 2.5");
//! ```
//!
//! ## Quoting
//!
//! Quoted multi-item output wraps each item in single quotes (`'a', 'b'`),
//! while a lone item is wrapped in double quotes (`"a"`).
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `debug`/`trace` level (truncation
//! decisions, rejected values) and never installs a subscriber.

pub mod error;
pub mod join;
pub mod macros;
pub mod options;
pub mod ser;
pub mod truncate;

pub use error::{Error, Result};
pub use join::{join, Joined};
pub use options::{Delimiter, JoinOptions, Strategy};
pub use ser::{to_items, ItemSerializer, ItemsSerializer};
pub use truncate::{is_truncated, join_truncated, Truncated};

use serde::Serialize;
use std::fmt::Display;
use std::io;

/// Joins `items` with the default options (`", "`, unquoted, no conjunction).
///
/// # Examples
///
/// ```rust
/// assert_eq!(seqjoin::join_default(&[1, 2, 3]), "1, 2, 3");
/// ```
#[must_use]
pub fn join_default<T: Display>(items: &[T]) -> String {
    join(items, &JoinOptions::default())
}

/// Joins `items` with an explicit delimiter, quoting flag and conjunction
/// flag.
///
/// # Examples
///
/// ```rust
/// use seqjoin::join_with;
///
/// assert_eq!(join_with(&["a", "b"], ", ", true, true), "'a' and 'b'");
/// assert_eq!(join_with(&[1, 2, 3], "-", false, false), "1-2-3");
/// ```
#[must_use]
pub fn join_with<T: Display>(
    items: &[T],
    delimiter: &str,
    quoted: bool,
    conjunction: bool,
) -> String {
    let options = JoinOptions::new()
        .with_delimiter(delimiter)
        .with_quoted(quoted)
        .with_conjunction(conjunction);
    join(items, &options)
}

/// Joins `items`, keeping only the first `head` and last `tail` items when
/// the sequence is longer than `head + tail`.
///
/// # Examples
///
/// ```rust
/// use seqjoin::join_truncated_with;
///
/// let numbers: Vec<i32> = (0..21).collect();
/// assert_eq!(
///     join_truncated_with(&numbers, 5, 3, false),
///     "0, 1, 2, 3, 4, ..., 18, 19, 20"
/// );
/// ```
#[must_use]
pub fn join_truncated_with<T: Display>(
    items: &[T],
    head: usize,
    tail: usize,
    quoted: bool,
) -> String {
    let options = JoinOptions::new()
        .with_limits(head, tail)
        .with_quoted(quoted);
    join_truncated(items, &options)
}

/// Materializes a serde sequence with [`to_items`] and joins it.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `value` is not a flat sequence of
/// scalars.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn join_serialize<T>(value: &T, options: &JoinOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let items = to_items(value)?;
    Ok(join(&items, options))
}

/// Materializes a serde sequence with [`to_items`] and joins it with
/// truncation.
///
/// # Examples
///
/// ```rust
/// use seqjoin::{join_truncated_serialize, JoinOptions};
///
/// let ids: Vec<u64> = (100..120).collect();
/// let options = JoinOptions::new().with_limits(2, 2);
/// assert_eq!(
///     join_truncated_serialize(&ids, &options).unwrap(),
///     "100, 101, ..., 118, 119"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `value` is not a flat sequence of
/// scalars.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn join_truncated_serialize<T>(value: &T, options: &JoinOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let items = to_items(value)?;
    Ok(join_truncated(&items, options))
}

/// Writes the output of [`join`] to `writer`.
///
/// # Examples
///
/// ```rust
/// use seqjoin::{join_to_writer, JoinOptions};
///
/// let mut buffer = Vec::new();
/// join_to_writer(&mut buffer, &["x", "y"], &JoinOptions::prose()).unwrap();
/// assert_eq!(buffer, b"x and y");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn join_to_writer<W, T>(mut writer: W, items: &[T], options: &JoinOptions) -> Result<()>
where
    W: io::Write,
    T: Display,
{
    writer
        .write_all(join(items, options).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Writes the output of [`join_truncated`] to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn join_truncated_to_writer<W, T>(
    mut writer: W,
    items: &[T],
    options: &JoinOptions,
) -> Result<()>
where
    W: io::Write,
    T: Display,
{
    writer
        .write_all(join_truncated(items, options).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
