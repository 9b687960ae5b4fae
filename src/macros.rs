/// Builds a `Vec<String>` from heterogeneous `Display` values.
///
/// Handy for lists that mix numbers, strings and symbols before handing
/// them to [`join`](crate::join) or [`join_truncated`](crate::join_truncated).
///
/// ```rust
/// use seqjoin::{items, join, JoinOptions};
///
/// let mixed = items![1, "x", 2.5, 'y'];
/// assert_eq!(join(&mixed, &JoinOptions::prose()), "1, x, 2.5 and y");
/// ```
#[macro_export]
macro_rules! items {
    () => {
        ::std::vec::Vec::<::std::string::String>::new()
    };

    ($($item:expr),+ $(,)?) => {
        ::std::vec![$(::std::string::ToString::to_string(&$item)),+]
    };
}
