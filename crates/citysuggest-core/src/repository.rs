// crates/citysuggest-core/src/repository.rs
use crate::common::RepositoryStats;
use crate::model::{CityQuery, CityRecord, Suggestion, Suggestions};
use crate::search::{match_record, rank, score};
use crate::text::fold_lower;
use crate::traits::SuggestionSource;
use std::collections::HashSet;
use std::sync::Arc;

/// The immutable gazetteer and the operations that query it.
///
/// Records live behind an `Arc`, so cloning a repository is cheap and clones
/// can be handed to as many threads as needed. Nothing is mutated after
/// construction.
#[derive(Clone, Debug)]
pub struct CityRepository {
    records: Arc<[CityRecord]>,
}

impl CityRepository {
    pub fn new(records: Vec<CityRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Builds a repository from already tokenized rows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use citysuggest_core::{CityQuery, CityRepository};
    ///
    /// let rows = vec![vec!["1", "Québec", "Quebec", "", "46.8", "-71.2"]];
    /// let repo = CityRepository::from_rows(
    ///     rows.into_iter()
    ///         .map(|r| r.into_iter().map(String::from).collect::<Vec<_>>()),
    /// );
    ///
    /// let found = repo.find_ranked_suggestions(&CityQuery::new("québec"));
    /// assert_eq!(found.first().unwrap().name, "Québec, -, -");
    /// ```
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        Self::new(rows.into_iter().map(CityRecord::new).collect())
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> RepositoryStats {
        let countries: HashSet<&str> = self.records.iter().map(CityRecord::country_code).collect();
        RepositoryStats {
            records: self.records.len(),
            countries: countries.len(),
        }
    }

    /// Every matching record, scored, in record order.
    ///
    /// An empty query name returns an empty list without scanning.
    pub fn find_suggestions(&self, query: &CityQuery) -> Suggestions {
        let mut out = Suggestions::new();
        if query.name.is_empty() {
            return out;
        }

        let query_lower = fold_lower(&query.name);

        for record in self.records.iter() {
            if let Some(hit) = match_record(record, &query_lower) {
                out.push(Suggestion {
                    name: record.display_name(),
                    latitude: record.latitude(),
                    longitude: record.longitude(),
                    score: score(query, hit.word, record),
                });
            }
        }

        tracing::trace!(query = %query.name, matches = out.len(), "scanned gazetteer");
        out
    }

    /// Every matching record, best score first. Ties keep record order.
    pub fn find_ranked_suggestions(&self, query: &CityQuery) -> Suggestions {
        rank(self.find_suggestions(query))
    }
}

impl SuggestionSource for CityRepository {
    fn find_ranked_suggestions(&self, query: &CityQuery) -> Suggestions {
        CityRepository::find_ranked_suggestions(self, query)
    }
}

impl FromIterator<CityRecord> for CityRepository {
    fn from_iter<T: IntoIterator<Item = CityRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
