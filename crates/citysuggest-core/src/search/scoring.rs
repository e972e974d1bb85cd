// crates/citysuggest-core/src/search/scoring.rs

//! Relevance scoring.
//!
//! A score is the product of three independent weights:
//!
//! - **lexical**: how much of the matched word the query covers
//!   (`chars(query) / chars(word)`, both lower-cased), `1.0` for an exact
//!   match;
//! - **latitude**: `1 - |Δlat| / 180` when the query carries a latitude;
//! - **longitude**: `1 - |Δlon| / 360` when the query carries a longitude.
//!
//! A missing or unparsable hint contributes a neutral `1.0`, so a plain name
//! query is ranked on lexical weight alone. The geographic weights are not
//! clamped: a distance beyond the axis range drives the weight (and the score)
//! negative.

use crate::model::{CityQuery, CityRecord};
use crate::text::{char_len, fold_lower};

/// Span of the latitude axis in degrees.
pub const LATITUDE_RANGE: f64 = 180.0;
/// Span of the longitude axis in degrees.
pub const LONGITUDE_RANGE: f64 = 360.0;

/// Final relevance of `record` for `query`, given the word that matched.
pub fn score(query: &CityQuery, matched_word: &str, record: &CityRecord) -> f32 {
    let lexical = lexical_weight(&query.name, matched_word);
    let latitude = latitude_weight(query, record);
    let longitude = longitude_weight(query, record);
    (lexical * latitude * longitude) as f32
}

/// Ratio of query length to matched-word length, in characters.
///
/// Both sides are counted after lower-casing, the form they were matched in.
/// Lower-casing can change the length (`İ` becomes `i` plus a combining dot),
/// and counting the raw forms would let the ratio exceed `1.0`.
pub fn lexical_weight(query_name: &str, matched_word: &str) -> f64 {
    char_len(&fold_lower(query_name)) as f64 / char_len(&fold_lower(matched_word)) as f64
}

pub fn latitude_weight(query: &CityQuery, record: &CityRecord) -> f64 {
    axis_weight(query.latitude_hint(), record.latitude(), LATITUDE_RANGE)
}

pub fn longitude_weight(query: &CityQuery, record: &CityRecord) -> f64 {
    axis_weight(query.longitude_hint(), record.longitude(), LONGITUDE_RANGE)
}

fn axis_weight(hint: Option<f64>, value: f64, range: f64) -> f64 {
    match hint {
        Some(wanted) => 1.0 - (wanted - value).abs() / range,
        None => 1.0,
    }
}
