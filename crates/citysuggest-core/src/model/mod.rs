// crates/citysuggest-core/src/model/mod.rs
pub mod query;
pub mod record;
pub mod suggestion;

pub use query::CityQuery;
pub use record::{columns, CityRecord, MISSING_COORDINATE, MISSING_TEXT};
pub use suggestion::{Suggestion, Suggestions};

/// File suffix of the bincode record cache written next to a gazetteer file.
pub const CACHE_SUFFIX: &str = "records.bin";
