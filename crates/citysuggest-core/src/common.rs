// crates/citysuggest-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded gazetteer.
///
/// Returned by [`crate::CityRepository::stats`], these counts reflect the
/// record set as loaded, header row excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryStats {
    pub records: usize,
    /// Distinct country codes, short rows counted under `"-"`.
    pub countries: usize,
}
