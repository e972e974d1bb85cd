// crates/citysuggest-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a gazetteer into a [`crate::CityRepository`].
///
/// Querying never fails: malformed coordinates, short rows and empty queries
/// all resolve to defaults. Only the I/O side of the crate returns this type.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("malformed gazetteer: {0}")]
    Csv(#[from] csv::Error),

    #[error("record cache error: {0}")]
    Cache(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, SuggestError>;
