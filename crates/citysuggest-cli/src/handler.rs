use citysuggest_core::{CityQuery, RepositoryStats, SuggestionSource, Suggestions};
use std::io::Write;

/// Maps the `q` / `latitude` / `longitude` request parameters onto a query,
/// asks `source` for ranked suggestions and writes them as JSON followed by
/// a newline.
pub fn write_suggestions<S, W>(
    source: &S,
    q: &str,
    latitude: Option<&str>,
    longitude: Option<&str>,
    pretty: bool,
    out: &mut W,
) -> anyhow::Result<Suggestions>
where
    S: SuggestionSource + ?Sized,
    W: Write,
{
    let query = CityQuery::from_params(Some(q), latitude, longitude);
    let suggestions = source.find_ranked_suggestions(&query);
    tracing::debug!(q, found = suggestions.len(), "answered query");

    writeln!(out, "{}", suggestions.to_json(pretty)?)?;
    Ok(suggestions)
}

pub fn write_stats<W: Write>(stats: &RepositoryStats, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Gazetteer statistics:")?;
    writeln!(out, "  Records: {}", stats.records)?;
    writeln!(out, "  Countries: {}", stats.countries)
}
