// crates/citysuggest-core/src/text.rs

//! Text helpers shared by the matcher and the scorer.

/// Lower-cases a string one character at a time.
///
/// Unlike [`str::to_lowercase`] this applies no context-sensitive rules
/// (final sigma), so every character of the input maps to the same lowered
/// characters wherever it appears. The matcher and the alternate-name
/// extractor both rely on that: a substring found in one lowered field is
/// found at the same place when the field is lowered again.
///
/// No accent stripping or other normalization is done: `"Québec"` folds to
/// `"québec"`, not `"quebec"`.
///
/// # Examples
///
/// ```rust
/// use citysuggest_core::text::fold_lower;
///
/// assert_eq!(fold_lower("Québec"), "québec");
/// assert_eq!(fold_lower("NEW YORK"), "new york");
/// ```
pub fn fold_lower(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Number of Unicode scalar values in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Parses a decimal coordinate, rejecting anything that is not finite.
///
/// `"NaN"` and `"inf"` are accepted by [`str::parse`] but carry no position,
/// so they are treated like unparsable text.
pub fn parse_coordinate(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
