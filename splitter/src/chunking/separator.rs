//! Separator selection and fragment splitting.

use crate::measure::AtomicUnit;

/// Picks the separator to use for one split pass over `text`.
///
/// The first separator that occurs in `text` wins. An empty separator matches
/// unconditionally. When nothing matches, the last separator is returned.
pub(crate) fn select_separator<'s>(text: &str, separators: &'s [String]) -> &'s str {
    separators
        .iter()
        .find(|separator| separator.is_empty() || text.contains(separator.as_str()))
        .or_else(|| separators.last())
        .map_or("", String::as_str)
}

/// Splits `text` on every occurrence of `separator`.
///
/// Returns the separator that joins the fragments back together along with
/// the fragments. Empty fragments between consecutive separators are kept.
/// The empty separator, or one that does not occur in `text`, explodes the
/// text into atomic units so every fragment of a multi-unit input is strictly
/// shorter than the input.
pub(crate) fn split_fragments<'t, 's>(
    text: &'t str,
    separator: &'s str,
    unit: AtomicUnit,
) -> (&'s str, Vec<&'t str>) {
    if separator.is_empty() || !text.contains(separator) {
        return ("", unit.explode(text));
    }
    (separator, text.split(separator).collect())
}
