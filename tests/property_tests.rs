//! Property-based tests for the rendering invariants that hold for every
//! input: strategy equivalence, determinism and the truncation threshold.

use proptest::prelude::*;
use seqjoin::{join, join_truncated, Delimiter, JoinOptions, Strategy as RenderStrategy};

fn options_strategy() -> impl Strategy<Value = JoinOptions> {
    (
        prop_oneof![
            Just(Delimiter::CommaSpace),
            Just(Delimiter::Comma),
            Just(Delimiter::Pipe),
            "[ -~]{0,3}".prop_map(Delimiter::Custom),
        ],
        any::<bool>(),
        any::<bool>(),
        0usize..6,
        0usize..6,
    )
        .prop_map(|(delimiter, quoted, conjunction, head, tail)| {
            JoinOptions::new()
                .with_delimiter(delimiter)
                .with_quoted(quoted)
                .with_conjunction(conjunction)
                .with_limits(head, tail)
        })
}

proptest! {
    #[test]
    fn prop_strategies_match(
        items in prop::collection::vec("[a-z0-9 ]{0,6}", 0..20),
        options in options_strategy(),
    ) {
        let bulk = options.clone().with_strategy(RenderStrategy::Bulk);
        let explicit = options.with_strategy(RenderStrategy::Explicit);
        prop_assert_eq!(join(&items, &bulk), join(&items, &explicit));
        prop_assert_eq!(join_truncated(&items, &bulk), join_truncated(&items, &explicit));
    }

    #[test]
    fn prop_deterministic(
        items in prop::collection::vec(any::<i64>(), 0..30),
        options in options_strategy(),
    ) {
        prop_assert_eq!(join(&items, &options), join(&items, &options));
        prop_assert_eq!(join_truncated(&items, &options), join_truncated(&items, &options));
    }

    #[test]
    fn prop_short_sequences_are_not_truncated(
        items in prop::collection::vec(any::<u16>(), 0..12),
        head in 0usize..8,
        tail in 0usize..8,
    ) {
        prop_assume!(items.len() <= head + tail);
        let options = JoinOptions::new().with_limits(head, tail);
        prop_assert_eq!(join_truncated(&items, &options), join(&items, &options));
    }

    #[test]
    fn prop_long_sequences_keep_head_and_tail(
        items in prop::collection::vec(any::<u16>(), 9..40),
    ) {
        let options = JoinOptions::new();
        let rendered = join_truncated(&items, &options);
        let expected = format!(
            "{}, ..., {}",
            join(&items[..5], &options),
            join(&items[items.len() - 3..], &options)
        );
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn prop_plain_join_matches_std_join(
        items in prop::collection::vec(any::<i32>(), 2..20),
    ) {
        let expected = items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(join(&items, &JoinOptions::new()), expected);
    }
}
