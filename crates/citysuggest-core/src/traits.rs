// crates/citysuggest-core/src/traits.rs
use crate::model::{CityQuery, Suggestions};

/// Anything that can answer a suggestion query.
///
/// [`crate::CityRepository`] is the real implementation. Front ends take a
/// `&dyn SuggestionSource` (or a generic `S: SuggestionSource`) so their
/// request handling can be exercised against a test double.
///
/// # Examples
///
/// ```rust
/// use citysuggest_core::{CityQuery, SuggestionSource, Suggestions};
///
/// struct Nothing;
/// impl SuggestionSource for Nothing {
///     fn find_ranked_suggestions(&self, _query: &CityQuery) -> Suggestions {
///         Suggestions::new()
///     }
/// }
///
/// assert!(Nothing.find_ranked_suggestions(&CityQuery::new("x")).is_empty());
/// ```
pub trait SuggestionSource: Send + Sync {
    /// Matching suggestions for `query`, best first.
    fn find_ranked_suggestions(&self, query: &CityQuery) -> Suggestions;
}

impl<S: SuggestionSource + ?Sized> SuggestionSource for &S {
    fn find_ranked_suggestions(&self, query: &CityQuery) -> Suggestions {
        (**self).find_ranked_suggestions(query)
    }
}

impl<S: SuggestionSource + ?Sized> SuggestionSource for std::sync::Arc<S> {
    fn find_ranked_suggestions(&self, query: &CityQuery) -> Suggestions {
        (**self).find_ranked_suggestions(query)
    }
}
