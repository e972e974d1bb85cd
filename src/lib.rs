//! citysuggest-rs
//!
//! Umbrella crate re-exporting [`citysuggest_core`], plus a prelude used by
//! the demo programs under `demos/`.

pub use citysuggest_core::*;

pub mod prelude {
    pub use citysuggest_core::{
        CityQuery, CityRecord, CityRepository, LoadOptions, RepositoryStats, Result,
        SuggestError, Suggestion, SuggestionSource, Suggestions,
    };
}
