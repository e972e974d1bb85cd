// crates/citysuggest-core/src/lib.rs

//! City-name suggestions over a static gazetteer.
//!
//! Given a name fragment (and optionally a position), [`CityRepository`]
//! finds every record whose primary, ASCII or alternate name contains the
//! fragment, scores each by how much of the matched name the fragment covers
//! and how close the city lies to the position, and returns them best first.
//!
//! ```rust
//! use citysuggest_core::{CityQuery, CityRepository};
//!
//! let repo = CityRepository::load().unwrap();
//! let found = repo.find_ranked_suggestions(&CityQuery::new("québec"));
//! assert_eq!(found.first().unwrap().name, "Québec, 10, CA");
//! ```

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod repository;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::RepositoryStats;
pub use crate::error::{Result, SuggestError};
pub use crate::loader::LoadOptions;
pub use crate::model::{CityQuery, CityRecord, Suggestion, Suggestions};
pub use crate::repository::CityRepository;
pub use crate::traits::SuggestionSource;
