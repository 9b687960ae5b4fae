//! The truncated joiner: summarizes long sequences as head, ellipsis, tail.
//!
//! A sequence is "long" when it has more than `head + tail` items. Long
//! sequences render the first `head` and the last `tail` items through
//! [`join`](crate::join), glued together with a fixed `", ..., "` marker.
//! Anything shorter is handed to the joiner unchanged.
//!
//! ```rust
//! use seqjoin::{join_truncated, JoinOptions};
//!
//! let numbers: Vec<u32> = (0..21).collect();
//! assert_eq!(
//!     join_truncated(&numbers, &JoinOptions::new()),
//!     "0, 1, 2, 3, 4, ..., 18, 19, 20"
//! );
//! ```
//!
//! A zero `head` or `tail` leaves that segment empty; the marker is still
//! written in full, so `head = 0` yields `", ..., x, y"`.

use crate::{join, JoinOptions};
use std::fmt;
use tracing::debug;

const ELLIPSIS: &str = ", ..., ";

/// Returns `true` when a sequence of `len` items is summarized rather than
/// shown in full.
///
/// # Examples
///
/// ```rust
/// use seqjoin::is_truncated;
///
/// assert!(!is_truncated(8, 5, 3));
/// assert!(is_truncated(9, 5, 3));
/// assert!(!is_truncated(0, 0, 0));
/// ```
#[must_use]
pub fn is_truncated(len: usize, head: usize, tail: usize) -> bool {
    len > head.saturating_add(tail)
}

/// Joins `items`, eliding the middle when there are more than
/// `options.head + options.tail` of them.
///
/// Both segments are rendered without a conjunction. The delimiter applies
/// inside each segment; the separators around `...` are always `", "`.
#[must_use]
pub fn join_truncated<T: fmt::Display>(items: &[T], options: &JoinOptions) -> String {
    if items.is_empty() {
        return String::new();
    }

    let (head, tail) = (options.head, options.tail);
    let segment = JoinOptions {
        conjunction: false,
        ..options.clone()
    };

    if !is_truncated(items.len(), head, tail) {
        return join(items, &segment);
    }

    debug!(len = items.len(), head, tail, "truncating sequence");

    let head_str = join(&items[..head], &segment);
    let tail_str = join(&items[items.len() - tail..], &segment);

    let mut output = String::with_capacity(head_str.len() + ELLIPSIS.len() + tail_str.len());
    output.push_str(&head_str);
    output.push_str(ELLIPSIS);
    output.push_str(&tail_str);
    output
}

/// Lazily rendered output of [`join_truncated`].
///
/// Created by [`JoinOptions::display_truncated`].
#[derive(Debug, Clone, Copy)]
pub struct Truncated<'a, T> {
    items: &'a [T],
    options: &'a JoinOptions,
}

impl<T: fmt::Display> fmt::Display for Truncated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_truncated(self.items, self.options))
    }
}

impl JoinOptions {
    /// Wraps `items` in a [`Truncated`] adapter that renders with these
    /// options.
    ///
    /// ```rust
    /// use seqjoin::JoinOptions;
    ///
    /// let options = JoinOptions::new().with_limits(2, 1);
    /// let ids = [10, 11, 12, 13, 14];
    /// assert_eq!(
    ///     format!("unknown ids: {}", options.display_truncated(&ids)),
    ///     "unknown ids: 10, 11, ..., 14"
    /// );
    /// ```
    #[must_use]
    pub fn display_truncated<'a, T>(&'a self, items: &'a [T]) -> Truncated<'a, T> {
        Truncated {
            items,
            options: self,
        }
    }
}
