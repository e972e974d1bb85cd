// crates/citysuggest-core/src/model/record.rs
use crate::text::parse_coordinate;
use serde::{Deserialize, Serialize};

/// Column positions (0-indexed) of a GeoNames-style gazetteer row.
pub mod columns {
    pub const NAME: usize = 1;
    pub const ASCII_NAME: usize = 2;
    pub const ALTERNATE_NAMES: usize = 3;
    pub const LATITUDE: usize = 4;
    pub const LONGITUDE: usize = 5;
    pub const COUNTRY_CODE: usize = 8;
    pub const ADMIN1_CODE: usize = 10;
}

/// Value returned by the text accessors when a row is too short.
pub const MISSING_TEXT: &str = "-";

/// Value returned by the coordinate accessors when a row is too short or the
/// column does not parse.
pub const MISSING_COORDINATE: f64 = 0.0;

/// One raw gazetteer row.
///
/// Rows are sparse: the source data does not guarantee every column is
/// present, so every accessor falls back to [`MISSING_TEXT`] or
/// [`MISSING_COORDINATE`] instead of failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    fields: Vec<String>,
}

impl CityRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    fn text(&self, column: usize) -> &str {
        self.fields
            .get(column)
            .map(String::as_str)
            .unwrap_or(MISSING_TEXT)
    }

    fn coordinate(&self, column: usize) -> f64 {
        self.fields
            .get(column)
            .and_then(|v| parse_coordinate(v))
            .unwrap_or(MISSING_COORDINATE)
    }

    pub fn name(&self) -> &str {
        self.text(columns::NAME)
    }

    pub fn ascii_name(&self) -> &str {
        self.text(columns::ASCII_NAME)
    }

    /// Comma-separated list of alternate names, unescaped and untrimmed.
    pub fn alternate_names(&self) -> &str {
        self.text(columns::ALTERNATE_NAMES)
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate(columns::LATITUDE)
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate(columns::LONGITUDE)
    }

    pub fn country_code(&self) -> &str {
        self.text(columns::COUNTRY_CODE)
    }

    pub fn admin1_code(&self) -> &str {
        self.text(columns::ADMIN1_CODE)
    }

    /// `"<name>, <admin1>, <country>"`, e.g. `"Québec, 10, CA"`.
    pub fn display_name(&self) -> String {
        format!(
            "{}, {}, {}",
            self.name(),
            self.admin1_code(),
            self.country_code()
        )
    }
}

impl From<Vec<String>> for CityRecord {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}
