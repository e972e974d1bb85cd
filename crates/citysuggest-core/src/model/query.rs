// crates/citysuggest-core/src/model/query.rs
use crate::text::parse_coordinate;
use serde::{Deserialize, Serialize};

/// A suggestion request: a name fragment plus optional position hints.
///
/// The coordinates are kept as the caller sent them. Text that does not parse
/// simply means "no geographic preference" on that axis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityQuery {
    pub name: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl CityQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_latitude(mut self, latitude: impl Into<String>) -> Self {
        self.latitude = Some(latitude.into());
        self
    }

    pub fn with_longitude(mut self, longitude: impl Into<String>) -> Self {
        self.longitude = Some(longitude.into());
        self
    }

    /// Builds a query from request parameters as a front end receives them
    /// (`q`, `latitude`, `longitude`).
    pub fn from_params(q: Option<&str>, latitude: Option<&str>, longitude: Option<&str>) -> Self {
        Self {
            name: q.unwrap_or_default().to_owned(),
            latitude: latitude.map(str::to_owned),
            longitude: longitude.map(str::to_owned),
        }
    }

    /// Parsed latitude hint, if any.
    pub fn latitude_hint(&self) -> Option<f64> {
        self.latitude.as_deref().and_then(parse_coordinate)
    }

    /// Parsed longitude hint, if any.
    pub fn longitude_hint(&self) -> Option<f64> {
        self.longitude.as_deref().and_then(parse_coordinate)
    }
}
