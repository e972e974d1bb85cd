// crates/citysuggest-core/src/search/matcher.rs
use crate::model::CityRecord;
use crate::text::fold_lower;

/// Which column of a record the query was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchedField {
    PrimaryName,
    AsciiName,
    AlternateNames,
}

/// A successful match: the field it came from and the word the scorer
/// divides against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameMatch<'a> {
    pub field: MatchedField,
    /// The whole primary/ASCII name, or the single alternate-name token that
    /// encloses the match. Borrowed from the record.
    pub word: &'a str,
}

/// Tests `record` against an already lower-cased query.
///
/// Fields are tried in priority order (primary name, ASCII name, alternate
/// names) and the first containing the query wins. An empty query never
/// matches.
pub fn match_record<'a>(record: &'a CityRecord, query_lower: &str) -> Option<NameMatch<'a>> {
    if query_lower.is_empty() {
        return None;
    }

    let name = record.name();
    if fold_lower(name).contains(query_lower) {
        return Some(NameMatch {
            field: MatchedField::PrimaryName,
            word: name,
        });
    }

    let ascii = record.ascii_name();
    if fold_lower(ascii).contains(query_lower) {
        return Some(NameMatch {
            field: MatchedField::AsciiName,
            word: ascii,
        });
    }

    let alternates = record.alternate_names();
    extract_token(alternates, query_lower).map(|word| NameMatch {
        field: MatchedField::AlternateNames,
        word,
    })
}

/// Returns the comma-delimited token of `alternate_names` that contains the
/// first case-insensitive occurrence of `query_lower`, or `None` if the query
/// does not occur at all.
///
/// Tokens are neither trimmed nor unescaped. If the query itself spans a
/// comma, the result runs from the start of the first token touched to the
/// end of the last one, so the query is always contained in what is returned.
///
/// # Examples
///
/// ```rust
/// use citysuggest_core::search::extract_token;
///
/// let names = "Cite de Quebec,Ciudad de Quebec,Kebek";
/// assert_eq!(extract_token(names, "dad de q"), Some("Ciudad de Quebec"));
/// assert_eq!(extract_token(names, "kebek"), Some("Kebek"));
/// assert_eq!(extract_token(names, "paris"), None);
/// ```
pub fn extract_token<'a>(alternate_names: &'a str, query_lower: &str) -> Option<&'a str> {
    if query_lower.is_empty() {
        return None;
    }

    // Lower-case the blob while remembering, for every lowered byte, the byte
    // offset of the source character it came from.
    let mut lowered = String::with_capacity(alternate_names.len());
    let mut origin: Vec<usize> = Vec::with_capacity(alternate_names.len());
    for (offset, ch) in alternate_names.char_indices() {
        for lc in ch.to_lowercase() {
            lowered.push(lc);
            origin.resize(lowered.len(), offset);
        }
    }

    let hit = lowered.find(query_lower)?;
    let match_start = origin[hit];
    let last_char = origin[hit + query_lower.len() - 1];
    let match_end = last_char
        + alternate_names[last_char..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);

    let token_start = alternate_names[..match_start]
        .rfind(',')
        .map_or(0, |comma| comma + 1);
    let token_end = alternate_names[match_end..]
        .find(',')
        .map_or(alternate_names.len(), |comma| match_end + comma);

    Some(&alternate_names[token_start..token_end])
}
