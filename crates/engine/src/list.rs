//! Delimited lists
//!
//! A list is a single string whose elements are separated by a literal
//! separator. Splitting never trims or collapses: leading, trailing and
//! adjacent separators all produce empty elements. The empty string is the
//! empty list.

/// Number of elements in `list`
///
/// ```
/// use propex_engine::list::count;
///
/// assert_eq!(count("", ":"), 0);
/// assert_eq!(count("abc", ":"), 1);
/// assert_eq!(count("::abc::def::", ":"), 7);
/// ```
pub fn count(list: &str, sep: &str) -> usize {
    if list.is_empty() {
        0
    } else {
        list.matches(sep).count() + 1
    }
}

/// Elements of `list`, empty ones included
pub fn split<'a>(list: &'a str, sep: &str) -> Vec<&'a str> {
    if list.is_empty() {
        Vec::new()
    } else {
        list.split(sep).collect()
    }
}

/// Elements `index .. index + len` rejoined with `sep`
///
/// Positions past the end of the list are dropped.
pub fn sublist(list: &str, sep: &str, index: usize, len: usize) -> String {
    split(list, sep)
        .into_iter()
        .skip(index)
        .take(len)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Replace every `old` separator with `new`
pub fn change_separator(list: &str, old: &str, new: &str) -> String {
    split(list, old).join(new)
}
