// crates/citysuggest-core/src/search/mod.rs

//! # Matching and Ranking
//!
//! The per-record pipeline: [`match_record`] decides whether a record
//! matches and which word it matched on, [`score`] turns that into a
//! relevance, and [`rank`] orders the collected suggestions.

mod matcher;
mod rank;
pub mod scoring;

pub use matcher::{extract_token, match_record, MatchedField, NameMatch};
pub use rank::rank;
pub use scoring::score;
