// crates/citysuggest-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression, record cache) and turns a
//! GeoNames-style TSV dump into a [`CityRepository`]. The matching engine
//! never depends on this module; it only sees the resulting records.

use crate::error::Result;
use crate::model::{CityRecord, CACHE_SUFFIX};
use crate::repository::CityRepository;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;
mod tsv;

pub use tsv::{read_rows, DEFAULT_DELIMITER};

static DEFAULT_REPOSITORY: OnceCell<CityRepository> = OnceCell::new();

/// How a gazetteer file is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Drop the first row (column titles).
    pub has_header: bool,
    /// Read/write a bincode copy of the parsed records next to the source.
    pub use_cache: bool,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_header: false,
            use_cache: true,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl LoadOptions {
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Where the record cache for `source` read with these options lives.
    ///
    /// Every option that changes the parsed rows is part of the file name,
    /// so loads with different options never share a cache:
    /// `cities.tsv` with a header and tabs caches to
    /// `cities.tsv.h1.d09.records.bin`.
    pub fn cache_path(&self, source: &Path) -> PathBuf {
        let suffix = format!(
            "h{}.d{:02x}.{CACHE_SUFFIX}",
            u8::from(self.has_header),
            self.delimiter
        );
        common_io::get_cache_path(source, &suffix)
    }
}

impl CityRepository {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities_sample.tsv"
    }

    /// Options matching the bundled sample dataset.
    pub fn default_load_options() -> LoadOptions {
        LoadOptions::default().with_header(true)
    }

    /// Load the bundled sample gazetteer.
    ///
    /// The file is parsed once per process; later calls hand out clones that
    /// share the same record set.
    pub fn load() -> Result<Self> {
        DEFAULT_REPOSITORY
            .get_or_try_init(|| {
                let path = Self::default_data_dir().join(Self::default_dataset_filename());
                Self::load_from_path(path, &Self::default_load_options())
            })
            .cloned()
    }

    /// Loads a TSV (or `.tsv.gz` with the `compact` feature) gazetteer.
    ///
    /// With `use_cache`, a fresh bincode cache next to the file is preferred
    /// over re-parsing, and a new one is written after parsing. Cache
    /// problems are never fatal.
    pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = options.cache_path(path);

        if options.use_cache {
            if let Some(records) = read_cache(path, &cache_path) {
                tracing::debug!(path = %cache_path.display(), records = records.len(), "loaded record cache");
                return Ok(Self::new(records));
            }
        }

        let reader = common_io::open_stream(path)?;
        let repository = Self::from_reader(reader, options)?;
        tracing::debug!(path = %path.display(), records = repository.len(), "parsed gazetteer");

        if options.use_cache {
            write_cache(&cache_path, repository.records());
        }

        Ok(repository)
    }

    /// Parses gazetteer text from any reader. No caching.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        let rows = read_rows(reader, options.delimiter, options.has_header)?;
        Ok(Self::from_rows(rows))
    }
}

/// Returns cached records if the cache exists, is at least as new as the
/// source, and decodes cleanly.
fn read_cache(source: &Path, cache_path: &Path) -> Option<Vec<CityRecord>> {
    let source_modified = std::fs::metadata(source).and_then(|m| m.modified()).ok()?;
    let cache_modified = std::fs::metadata(cache_path).and_then(|m| m.modified()).ok()?;
    if cache_modified < source_modified {
        tracing::debug!(path = %cache_path.display(), "record cache is stale");
        return None;
    }

    let bytes = std::fs::read(cache_path).ok()?;
    match bincode::deserialize::<Vec<CityRecord>>(&bytes) {
        Ok(records) => Some(records),
        Err(e) => {
            tracing::debug!(path = %cache_path.display(), error = %e, "ignoring unreadable record cache");
            None
        }
    }
}

/// Best-effort; failures are logged and otherwise ignored.
///
/// The cache is written to a sibling file first and renamed into place, so a
/// concurrent reader sees either the old cache or the complete new one.
fn write_cache(cache_path: &Path, records: &[CityRecord]) {
    let partial = common_io::get_cache_path(cache_path, &format!("{}.tmp", std::process::id()));
    let result = bincode::serialize(records)
        .map_err(crate::error::SuggestError::from)
        .and_then(|bytes| std::fs::write(&partial, bytes).map_err(Into::into))
        .and_then(|()| std::fs::rename(&partial, cache_path).map_err(Into::into));
    if let Err(e) = result {
        let _ = std::fs::remove_file(&partial);
        tracing::warn!(path = %cache_path.display(), error = %e, "could not write record cache");
    }
}
