// crates/citysuggest-core/src/loader/tsv.rs

//! Delimited-text rows for gazetteer dumps.
//!
//! GeoNames exports are tab separated and mostly unquoted, but stray quotes
//! do occur inside alternate names. The `csv` reader is configured to never
//! reject such input: rows may have any number of fields, quoting is
//! tolerated rather than enforced, and bytes that are not UTF-8 are decoded
//! lossily field by field.

use crate::error::Result;
use csv::{ByteRecord, ReaderBuilder};
use std::io::Read;

pub const DEFAULT_DELIMITER: u8 = b'\t';

/// Reads every row of `reader` as a list of text fields.
///
/// With `has_header` the first row is consumed as column titles and not
/// returned. Blank lines are skipped.
///
/// # Examples
///
/// ```rust
/// use citysuggest_core::loader::read_rows;
///
/// let text = "1\tQuébec\n\n2\t\"Big \"\"Q\"\"\"\n";
/// let rows = read_rows(text.as_bytes(), b'\t', false).unwrap();
/// assert_eq!(rows, vec![vec!["1", "Québec"], vec!["2", "Big \"Q\""]]);
/// ```
pub fn read_rows<R: Read>(
    reader: R,
    delimiter: u8,
    has_header: bool,
) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(has_header)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    while rdr.read_byte_record(&mut record)? {
        rows.push(decode(&record));
    }
    Ok(rows)
}

fn decode(record: &ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}
