// crates/citysuggest-core/tests/loader.rs

use citysuggest_core::{CityQuery, CityRepository, LoadOptions, SuggestError};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

const SAMPLE: &str = "id\tname\tascii\talt_name\tlat\tlong\n\
                      1\tQuébec\tQuebec\tKebek,Quebec City\t46.81228\t-71.21454\tP\tPPLA\tCA\t\t10\n\
                      2\tLondon\tLondon\t\t42.98339\t-81.23304\tP\tPPL\tCA\t\t08\n";

fn write_sample(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("cities.tsv");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn loads_tsv_and_skips_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());

    let options = LoadOptions::default().with_header(true).with_cache(false);
    let repo = CityRepository::load_from_path(&path, &options).unwrap();

    assert_eq!(repo.len(), 2);
    assert_eq!(repo.records()[0].name(), "Québec");
    assert!(!options.cache_path(&path).exists());
}

#[test]
fn header_row_is_data_unless_skipped() {
    let options = LoadOptions::default().with_cache(false);
    let repo = CityRepository::from_reader(SAMPLE.as_bytes(), &options).unwrap();

    assert_eq!(repo.len(), 3);
    let found = repo.find_ranked_suggestions(&CityQuery::new("alt_name"));
    assert_eq!(found.len(), 1);
    assert_eq!(found.suggestions[0].name, "name, -, -");
}

#[test]
fn writes_and_reuses_record_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());
    let options = LoadOptions::default().with_header(true);

    let first = CityRepository::load_from_path(&path, &options).unwrap();
    let cache = options.cache_path(&path);
    assert!(cache.exists());
    assert!(cache.to_string_lossy().ends_with("cities.tsv.h1.d09.records.bin"));

    let second = CityRepository::load_from_path(&path, &options).unwrap();
    assert_eq!(first.records(), second.records());
}

#[test]
fn corrupt_cache_falls_back_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());
    let options = LoadOptions::default().with_header(true);
    fs::write(options.cache_path(&path), b"not bincode").unwrap();

    let repo = CityRepository::load_from_path(&path, &options).unwrap();
    assert_eq!(repo.len(), 2);
}

#[test]
fn cache_is_not_shared_between_header_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());
    let raw = LoadOptions::default();
    let headed = LoadOptions::default().with_header(true);

    let first = CityRepository::load_from_path(&path, &raw).unwrap();
    let second = CityRepository::load_from_path(&path, &headed).unwrap();
    let third = CityRepository::load_from_path(&path, &raw).unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 2);
    assert_eq!(third.len(), 3);
    assert_ne!(raw.cache_path(&path), headed.cache_path(&path));
    assert!(raw.cache_path(&path).exists());
    assert!(headed.cache_path(&path).exists());
}

#[test]
fn cache_is_not_shared_between_delimiters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.csv");
    fs::write(&path, "1,London,London\n").unwrap();
    let tabs = LoadOptions::default();
    let commas = LoadOptions::default().with_delimiter(b',');

    let by_tab = CityRepository::load_from_path(&path, &tabs).unwrap();
    let by_comma = CityRepository::load_from_path(&path, &commas).unwrap();

    assert_eq!(by_tab.records()[0].name(), "-");
    assert_eq!(by_comma.records()[0].name(), "London");
}

#[test]
fn stale_cache_is_reparsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());
    let options = LoadOptions::default().with_header(true);
    assert_eq!(CityRepository::load_from_path(&path, &options).unwrap().len(), 2);

    let mut grown = SAMPLE.to_string();
    grown.push_str("3\tToronto\tToronto\t\t43.70011\t-79.4163\tP\tPPLA\tCA\t\t08\n");
    fs::write(&path, grown).unwrap();
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(SystemTime::now() + Duration::from_secs(60))
        .unwrap();

    let repo = CityRepository::load_from_path(&path, &options).unwrap();
    assert_eq!(repo.len(), 3);
    assert_eq!(repo.find_ranked_suggestions(&CityQuery::new("toronto")).len(), 1);
}

#[test]
fn disabled_cache_ignores_existing_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());
    let options = LoadOptions::default().with_header(true);
    let bogus = bincode::serialize(&Vec::<citysuggest_core::CityRecord>::new()).unwrap();
    fs::write(options.cache_path(&path), bogus).unwrap();

    let cached = CityRepository::load_from_path(&path, &options).unwrap();
    let fresh = CityRepository::load_from_path(&path, &options.clone().with_cache(false)).unwrap();
    assert!(cached.is_empty());
    assert_eq!(fresh.len(), 2);
}

#[test]
fn headerless_load_of_bundled_dataset_keeps_default_load_clean() {
    let path = CityRepository::default_data_dir().join(CityRepository::default_dataset_filename());
    let raw = CityRepository::load_from_path(&path, &LoadOptions::default()).unwrap();
    let repo = CityRepository::load().unwrap();

    assert_eq!(raw.len(), repo.len() + 1);
    assert_eq!(raw.find_ranked_suggestions(&CityQuery::new("alt_name")).len(), 1);
    assert!(repo.find_ranked_suggestions(&CityQuery::new("alt_name")).is_empty());
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = CityRepository::load_from_path(dir.path().join("absent.tsv"), &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, SuggestError::NotFound(_)));
    assert!(err.to_string().contains("absent.tsv"));
}

#[cfg(feature = "compact")]
#[test]
fn reads_gzipped_tsv() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.tsv.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    fs::write(&path, encoder.finish().unwrap()).unwrap();

    let options = LoadOptions::default().with_header(true).with_cache(false);
    let repo = CityRepository::load_from_path(&path, &options).unwrap();
    let found = repo.find_ranked_suggestions(&CityQuery::new("kebek"));
    assert_eq!(found.suggestions[0].name, "Québec, 10, CA");
}
