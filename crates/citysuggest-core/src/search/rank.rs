// crates/citysuggest-core/src/search/rank.rs
use crate::model::Suggestions;
use std::cmp::Ordering;

/// Orders suggestions by descending score.
///
/// The sort is stable: suggestions with equal scores keep the order in which
/// they were discovered, which is record order. `0.0` and `-0.0` are equal.
pub fn rank(mut list: Suggestions) -> Suggestions {
    list.suggestions
        .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    list
}
