use serde::{Deserialize, Serialize};

use crate::catalog::store::SongCatalog;
use crate::core::record::SongRecord;
use crate::core::types::{Direction, MatchKind};
use crate::matching::similarity::close_matches;

/// A matched song, shaped for the direction of the search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The field the query was compared against (title or short form)
    pub primary: String,

    /// The other field
    pub secondary: String,

    /// Which phase found the song
    pub kind: MatchKind,

    /// Playback link for the song
    pub link: String,
}

impl MatchResult {
    pub fn new(record: &SongRecord, direction: Direction, kind: MatchKind) -> Self {
        let (primary, secondary) = match direction {
            Direction::LongToShort => (record.title(), record.short_form()),
            Direction::ShortToLong => (record.short_form(), record.title()),
        };

        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            kind,
            link: record.playback_url(),
        }
    }
}

/// Default minimum similarity ratio for fuzzy matches
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Default cap on the number of fuzzy matches
pub const DEFAULT_MAX_FUZZY_RESULTS: usize = 5;

/// Configuration for the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum similarity ratio (0-1) for a fuzzy match
    pub similarity_threshold: f64,
    /// Maximum number of fuzzy matches returned
    pub max_fuzzy_results: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_fuzzy_results: DEFAULT_MAX_FUZZY_RESULTS,
        }
    }
}

/// The main matching engine
#[derive(Debug)]
pub struct MatchingEngine<'a> {
    catalog: &'a SongCatalog,
    /// Configuration including the similarity threshold and fuzzy result cap
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a SongCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a SongCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Find songs matching `query`.
    ///
    /// The query is trimmed and lowercased. Substring hits are returned if
    /// there are any; only when there are none does the fuzzy phase run.
    pub fn search(&self, query: &str, direction: Direction) -> Vec<MatchResult> {
        let query = query.trim().to_lowercase();

        // Step 1: substring containment
        let exact = self.exact_matches(&query, direction);
        if !exact.is_empty() {
            tracing::debug!(
                "{} exact matches for '{}' ({})",
                exact.len(),
                query,
                direction
            );
            return exact;
        }

        // Step 2: similarity fallback
        let fuzzy = self.fuzzy_matches(&query, direction);
        tracing::debug!(
            "{} fuzzy matches for '{}' ({})",
            fuzzy.len(),
            query,
            direction
        );
        fuzzy
    }

    /// Records whose lowercased field contains `query`, in catalog order
    fn exact_matches(&self, query: &str, direction: Direction) -> Vec<MatchResult> {
        self.catalog
            .field_index(direction)
            .containing(query)
            .map(|idx| MatchResult::new(&self.catalog.records()[idx], direction, MatchKind::Exact))
            .collect()
    }

    /// Best-scoring records by similarity ratio, highest first
    fn fuzzy_matches(&self, query: &str, direction: Direction) -> Vec<MatchResult> {
        let cutoff = self.config.similarity_threshold.clamp(0.0, 1.0);
        let keys = self.catalog.field_index(direction).keys();

        close_matches(query, keys, self.config.max_fuzzy_results, cutoff)
            .into_iter()
            .filter_map(|m| {
                tracing::trace!("Fuzzy candidate '{}' scored {:.3}", m.candidate, m.score);
                self.catalog.resolve(direction, m.candidate)
            })
            .map(|record| MatchResult::new(record, direction, MatchKind::Fuzzy))
            .collect()
    }
}

/// Search `catalog` with a custom similarity threshold and the default fuzzy cap
pub fn search(
    catalog: &SongCatalog,
    query: &str,
    direction: Direction,
    similarity_threshold: f64,
) -> Vec<MatchResult> {
    let config = MatchingConfig {
        similarity_threshold,
        ..MatchingConfig::default()
    };
    MatchingEngine::with_config(catalog, config).search(query, direction)
}
