//! The joiner: renders a whole sequence into one string.
//!
//! Rules, in priority order:
//!
//! 1. An empty sequence renders as `""`.
//! 2. A single item renders alone; quoting uses double quotes (`"x"`) and the
//!    delimiter and conjunction are ignored.
//! 3. Two items with a conjunction render as `a and b` (or `'a' and 'b'`).
//! 4. Three or more items with a conjunction get a synthetic `and` element
//!    before the last item, are joined with `", "`, and the punctuation
//!    around that element is then collapsed (`1, 2, and, 3` becomes
//!    `1, 2 and 3`).
//! 5. Otherwise every item is rendered (single-quoted when requested) and the
//!    parts are joined with the delimiter.
//!
//! ```rust
//! use seqjoin::{join, JoinOptions};
//!
//! assert_eq!(join(&[1, 2, 3], &JoinOptions::new()), "1, 2, 3");
//! assert_eq!(join(&["a", "b", "c"], &JoinOptions::prose().quoted()), "'a', 'b' and 'c'");
//! assert_eq!(join(&["lone"], &JoinOptions::new().quoted()), "\"lone\"");
//! ```

use crate::{JoinOptions, Strategy};
use std::fmt;

const CONJUNCTION: &str = "and";
const CONJUNCTION_DELIMITER: &str = ", ";

/// Joins `items` into a single string according to `options`.
///
/// `options.head` and `options.tail` are ignored; see
/// [`join_truncated`](crate::join_truncated) for the summarizing variant.
#[must_use]
pub fn join<T: fmt::Display>(items: &[T], options: &JoinOptions) -> String {
    match items {
        [] => String::new(),
        [only] => {
            if options.quoted {
                format!("\"{}\"", only)
            } else {
                only.to_string()
            }
        }
        [first, second] if options.conjunction => {
            if options.quoted {
                format!("'{}' and '{}'", first, second)
            } else {
                format!("{} and {}", first, second)
            }
        }
        [rest @ .., last] if options.conjunction => {
            let parts = rest
                .iter()
                .map(Item::Value)
                .chain([Item::Conjunction, Item::Value(last)]);
            let joined = render(parts, CONJUNCTION_DELIMITER, options.quoted, options.strategy);
            collapse_conjunction(&joined)
        }
        _ => render(
            items.iter(),
            options.delimiter.as_str(),
            options.quoted,
            options.strategy,
        ),
    }
}

/// Joins a run of items with no singleton or conjunction handling.
pub(crate) fn render<I>(items: I, delimiter: &str, quoted: bool, strategy: Strategy) -> String
where
    I: Iterator,
    I::Item: fmt::Display,
{
    match strategy {
        Strategy::Bulk => items
            .map(|item| {
                if quoted {
                    format!("'{}'", item)
                } else {
                    item.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(delimiter),
        Strategy::Explicit => {
            let mut output = String::new();
            for (index, item) in items.enumerate() {
                if index > 0 {
                    output.push_str(delimiter);
                }
                if quoted {
                    output.push('\'');
                    output.push_str(&item.to_string());
                    output.push('\'');
                } else {
                    output.push_str(&item.to_string());
                }
            }
            output
        }
    }
}

fn collapse_conjunction(joined: &str) -> String {
    joined
        .replace(", 'and',", " and")
        .replace(", and,", " and")
}

/// A sequence element, or the synthetic conjunction spliced in before the
/// last element.
enum Item<'a, T> {
    Value(&'a T),
    Conjunction,
}

impl<T: fmt::Display> fmt::Display for Item<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Value(value) => fmt::Display::fmt(value, f),
            Item::Conjunction => f.write_str(CONJUNCTION),
        }
    }
}

/// Lazily rendered output of [`join`], for use inside `format!` and friends.
///
/// Created by [`JoinOptions::display`].
///
/// ```rust
/// use seqjoin::JoinOptions;
///
/// let options = JoinOptions::prose();
/// let message = format!("allowed values are {}", options.display(&[1, 2, 3]));
/// assert_eq!(message, "allowed values are 1, 2 and 3");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Joined<'a, T> {
    items: &'a [T],
    options: &'a JoinOptions,
}

impl<T: fmt::Display> fmt::Display for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(self.items, self.options))
    }
}

impl JoinOptions {
    /// Wraps `items` in a [`Joined`] adapter that renders with these options.
    #[must_use]
    pub fn display<'a, T>(&'a self, items: &'a [T]) -> Joined<'a, T> {
        Joined {
            items,
            options: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Delimiter;

    fn both_strategies(options: JoinOptions) -> [JoinOptions; 2] {
        [
            options.clone().with_strategy(Strategy::Bulk),
            options.with_strategy(Strategy::Explicit),
        ]
    }

    #[test]
    fn test_empty() {
        let items: [i32; 0] = [];
        assert_eq!(join(&items, &JoinOptions::new()), "");
        assert_eq!(join(&items, &JoinOptions::prose().quoted()), "");
    }

    #[test]
    fn test_single_item_ignores_delimiter_and_conjunction() {
        let options = JoinOptions::prose().with_delimiter(Delimiter::Pipe);
        assert_eq!(join(&[7], &options), "7");
        assert_eq!(join(&[7], &options.quoted()), "\"7\"");
    }

    #[test]
    fn test_general_join() {
        for options in both_strategies(JoinOptions::new()) {
            assert_eq!(join(&[1, 2, 3], &options), "1, 2, 3");
            assert_eq!(join(&["a", "b"], &options.clone().quoted()), "'a', 'b'");
        }
    }

    #[test]
    fn test_pair_with_conjunction_ignores_delimiter() {
        let options = JoinOptions::prose().with_delimiter(Delimiter::Semicolon);
        assert_eq!(join(&["a", "b"], &options), "a and b");
        assert_eq!(join(&["a", "b"], &options.quoted()), "'a' and 'b'");
    }

    #[test]
    fn test_conjunction_forces_comma_delimiter() {
        for options in both_strategies(JoinOptions::prose().with_delimiter(Delimiter::Pipe)) {
            assert_eq!(join(&[1, 2, 3, 4], &options), "1, 2, 3 and 4");
            assert_eq!(
                join(&["x", "y", "z"], &options.clone().quoted()),
                "'x', 'y' and 'z'"
            );
        }
    }

    #[test]
    fn test_conjunction_collapses_literal_and_items() {
        // Items that are themselves "and" take part in the fix-up.
        let options = JoinOptions::prose();
        assert_eq!(join(&["x", "and", "y", "z"], &options), "x and y and z");
    }

    #[test]
    fn test_literal_and_without_conjunction_is_untouched() {
        assert_eq!(join(&["x", "and", "y"], &JoinOptions::new()), "x, and, y");
    }

    #[test]
    fn test_render_explicit_matches_bulk() {
        let items = ["it's", "", "a b"];
        for quoted in [false, true] {
            let bulk = render(items.iter(), " / ", quoted, Strategy::Bulk);
            let explicit = render(items.iter(), " / ", quoted, Strategy::Explicit);
            assert_eq!(bulk, explicit);
        }
    }

    #[test]
    fn test_display_adapter() {
        let options = JoinOptions::new().quoted();
        assert_eq!(options.display(&['p', 'q']).to_string(), "'p', 'q'");
    }
}
