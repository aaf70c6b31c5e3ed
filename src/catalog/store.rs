use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::catalog::index::FieldIndex;
use crate::core::record::SongRecord;
use crate::core::types::{Direction, TrackId};
use crate::parsing::dataset::{load_dataset_file, DatasetError, DatasetRow};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub records: Vec<SongRecord>,
}

/// Ordered, read-only collection of songs with lookup indexes.
///
/// Records are only added through [`SongCatalog::add_record`], which keeps
/// the field indexes in step:
///
/// ```compile_fail
/// use taytay::{SongCatalog, SongRecord};
///
/// let mut catalog = SongCatalog::new();
/// catalog.records.push(SongRecord::new("Mine", "t1"));
/// ```
#[derive(Debug, Default)]
pub struct SongCatalog {
    /// All songs, in dataset order
    records: Vec<SongRecord>,

    /// Index: track ID -> index of the first record with that ID
    id_to_index: HashMap<TrackId, usize>,

    /// Lowercased titles
    titles: FieldIndex,

    /// Lowercased short forms
    short_forms: FieldIndex,
}

/// Build a catalog from dataset rows, deriving every short form.
///
/// Missing titles or identifiers are coerced to the empty string.
pub fn build_catalog<I>(rows: I) -> SongCatalog
where
    I: IntoIterator<Item = DatasetRow>,
{
    let mut catalog = SongCatalog::new();
    for row in rows {
        catalog.add_record(SongRecord::new(
            row.title.unwrap_or_default(),
            row.identifier.unwrap_or_default(),
        ));
    }
    tracing::debug!("Built catalog with {} records", catalog.len());
    catalog
}

impl SongCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a dataset or an exported catalog file.
    ///
    /// `.json` files are read as exported catalogs, `.tsv` files as
    /// tab-delimited datasets, and anything else as comma-delimited.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let catalog = match ext.as_deref() {
            Some("json") => Self::from_json(&std::fs::read_to_string(path)?)?,
            Some("tsv") => build_catalog(load_dataset_file(path, b'\t')?),
            _ => build_catalog(load_dataset_file(path, b',')?),
        };

        tracing::info!(
            "Loaded {} songs from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse an exported catalog.
    ///
    /// Stored short forms are ignored and regenerated from the titles.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        Ok(build_catalog(data.records.into_iter().map(|record| {
            DatasetRow {
                title: Some(record.title().to_string()),
                identifier: Some(record.id().0.clone()),
            }
        })))
    }

    /// Add a record to the end of the catalog
    pub fn add_record(&mut self, record: SongRecord) {
        let index = self.records.len();

        if self.id_to_index.contains_key(record.id()) {
            tracing::warn!(
                "Duplicate track ID '{}' for '{}'; lookups by ID return the first entry",
                record.id(),
                record.title()
            );
        } else {
            self.id_to_index.insert(record.id().clone(), index);
        }

        self.titles.push(record.title());
        self.short_forms.push(record.short_form());
        self.records.push(record);
    }

    /// All songs, in dataset order
    pub fn records(&self) -> &[SongRecord] {
        &self.records
    }

    /// Get a record by track ID
    pub fn get(&self, id: &TrackId) -> Option<&SongRecord> {
        self.id_to_index.get(id).map(|&idx| &self.records[idx])
    }

    /// The searchable field index for a direction: titles for
    /// long-to-short, short forms for short-to-long.
    pub fn field_index(&self, direction: Direction) -> &FieldIndex {
        match direction {
            Direction::LongToShort => &self.titles,
            Direction::ShortToLong => &self.short_forms,
        }
    }

    /// First record, in catalog order, whose lowercased field equals `key`
    pub fn resolve(&self, direction: Direction, key: &str) -> Option<&SongRecord> {
        self.field_index(direction)
            .first(key)
            .map(|idx| &self.records[idx])
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            records: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of records in catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<DatasetRow> {
        vec![
            DatasetRow::new("Closure (Taylor's Version)", "t1"),
            DatasetRow::new("Mine", "t2"),
            DatasetRow::new("Love Story", "t3"),
        ]
    }

    #[test]
    fn test_build_preserves_order_and_derives_short_forms() {
        let catalog = build_catalog(sample_rows());
        assert_eq!(catalog.len(), 3);

        let short_forms: Vec<_> = catalog
            .records()
            .iter()
            .map(SongRecord::short_form)
            .collect();
        assert_eq!(short_forms, vec!["C(TV)", "M", "LS"]);
    }

    #[test]
    fn test_add_record_keeps_indexes_in_step() {
        let mut catalog = build_catalog(sample_rows());
        catalog.add_record(SongRecord::new("Sparks Fly", "t4"));

        assert_eq!(catalog.records().len(), 4);
        assert_eq!(catalog.field_index(Direction::LongToShort).keys().len(), 4);
        assert_eq!(
            catalog.resolve(Direction::ShortToLong, "sf").unwrap().id(),
            &TrackId::new("t4")
        );
    }

    #[test]
    fn test_missing_values_are_coerced() {
        let catalog = build_catalog(vec![DatasetRow::default()]);
        assert_eq!(catalog.len(), 1);
        let record = &catalog.records()[0];
        assert_eq!(record.title(), "");
        assert_eq!(record.short_form(), "");
        assert_eq!(record.id(), &TrackId::new(""));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = build_catalog(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.field_index(Direction::LongToShort).keys().is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = build_catalog(sample_rows());
        assert_eq!(catalog.get(&TrackId::new("t2")).unwrap().title(), "Mine");
        assert!(catalog.get(&TrackId::new("missing")).is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let catalog = build_catalog(vec![
            DatasetRow::new("Mine", "dup"),
            DatasetRow::new("Sparks Fly", "dup"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&TrackId::new("dup")).unwrap().title(), "Mine");
    }

    #[test]
    fn test_resolve_by_direction() {
        let catalog = build_catalog(sample_rows());
        assert_eq!(
            catalog.resolve(Direction::LongToShort, "mine").unwrap().id(),
            &TrackId::new("t2")
        );
        assert_eq!(
            catalog.resolve(Direction::ShortToLong, "c(tv)").unwrap().title(),
            "Closure (Taylor's Version)"
        );
        assert!(catalog.resolve(Direction::ShortToLong, "mine").is_none());
    }

    #[test]
    fn test_resolve_ambiguous_short_form_picks_first() {
        let catalog = build_catalog(vec![
            DatasetRow::new("Love Story", "t1"),
            DatasetRow::new("Long Story Short", "t2"),
            DatasetRow::new("Last Season", "t3"),
        ]);
        assert_eq!(
            catalog.resolve(Direction::ShortToLong, "ls").unwrap().id(),
            &TrackId::new("t1")
        );
    }

    #[test]
    fn test_json_roundtrip_regenerates_short_forms() {
        let catalog = build_catalog(sample_rows());
        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"short_form\": \"C(TV)\""));

        let tampered = json.replace("\"C(TV)\"", "\"WRONG\"");
        let reloaded = SongCatalog::from_json(&tampered).unwrap();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.records()[0].short_form(), "C(TV)");
    }

    #[test]
    fn test_from_json_invalid() {
        let err = SongCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("songs.csv");
        std::fs::write(&csv_path, "name,id\nMine,t1\n").unwrap();
        assert_eq!(SongCatalog::load_from_file(&csv_path).unwrap().len(), 1);

        let tsv_path = dir.path().join("songs.tsv");
        std::fs::write(&tsv_path, "name\tid\nMine\tt1\nSparks Fly\tt2\n").unwrap();
        assert_eq!(SongCatalog::load_from_file(&tsv_path).unwrap().len(), 2);

        let json_path = dir.path().join("catalog.json");
        let exported = build_catalog(sample_rows()).to_json().unwrap();
        std::fs::write(&json_path, exported).unwrap();
        assert_eq!(SongCatalog::load_from_file(&json_path).unwrap().len(), 3);
    }

    #[test]
    fn test_load_from_file_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.csv");
        std::fs::write(&path, "album,id\n1989,t1\n").unwrap();

        let err = SongCatalog::load_from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Dataset(DatasetError::MissingColumn(..))
        ));
    }
}
