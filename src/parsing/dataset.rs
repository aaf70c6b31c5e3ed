use std::path::Path;

use thiserror::Error;

/// Maximum number of rows accepted from a single dataset
pub const MAX_RECORDS: usize = 100_000;

/// Header names accepted for the title column, in priority order
pub const TITLE_COLUMNS: [&str; 3] = ["name", "title", "song"];

/// Header names accepted for the identifier column, in priority order
pub const ID_COLUMNS: [&str; 3] = ["id", "identifier", "track_id"];

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset has no {0} column (expected one of: {1})")]
    MissingColumn(&'static str, String),

    #[error("Too many records: exceeds maximum of {0}")]
    TooManyRecords(usize),
}

/// One input row: the only fields the catalog needs.
///
/// Missing cells are `None`; the catalog coerces them rather than rejecting the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetRow {
    pub title: Option<String>,
    pub identifier: Option<String>,
}

impl DatasetRow {
    pub fn new(title: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            identifier: Some(identifier.into()),
        }
    }
}

/// Read a delimited dataset file with a header row
///
/// # Errors
///
/// Returns `DatasetError::Io` if the file cannot be read, or the errors of
/// [`parse_dataset_text`].
pub fn load_dataset_file(path: &Path, delimiter: u8) -> Result<Vec<DatasetRow>, DatasetError> {
    let content = std::fs::read_to_string(path)?;
    parse_dataset_text(&content, delimiter)
}

/// Parse delimited text with a header row.
///
/// Columns other than the title and identifier (release date, audio
/// features, popularity, ...) are ignored. Rows may be shorter than the
/// header; absent or empty cells become `None`.
///
/// # Errors
///
/// Returns `DatasetError::MissingColumn` if no title or identifier column is
/// present, `DatasetError::Csv` on malformed input, or
/// `DatasetError::TooManyRecords` if the limit is exceeded.
pub fn parse_dataset_text(text: &str, delimiter: u8) -> Result<Vec<DatasetRow>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let title_idx = find_column(&headers, &TITLE_COLUMNS)
        .ok_or_else(|| DatasetError::MissingColumn("title", TITLE_COLUMNS.join(", ")))?;
    let id_idx = find_column(&headers, &ID_COLUMNS)
        .ok_or_else(|| DatasetError::MissingColumn("identifier", ID_COLUMNS.join(", ")))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;

        if rows.len() >= MAX_RECORDS {
            return Err(DatasetError::TooManyRecords(MAX_RECORDS));
        }

        let cell = |idx: usize| {
            record
                .get(idx)
                .filter(|value| !value.is_empty())
                .map(ToString::to_string)
        };

        rows.push(DatasetRow {
            title: cell(title_idx),
            identifier: cell(id_idx),
        });
    }

    tracing::debug!(
        "Parsed {} dataset rows (title column {}, id column {})",
        rows.len(),
        title_idx,
        id_idx
    );

    Ok(rows)
}

fn find_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    candidates.iter().find_map(|candidate| {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(candidate))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_export() {
        let csv = r#",name,album,release_date,track_number,id,uri,acousticness,popularity
0,Welcome To New York (Taylor's Version),1989 (Taylor's Version),2023-10-27,1,4WUepByoeqcedHoYhSNHRt,spotify:track:4WUepByoeqcedHoYhSNHRt,0.009,79
1,"Style (Taylor's Version)",1989 (Taylor's Version),2023-10-27,3,4Q4Ls7zuq2IVSdtJfNmNdd,spotify:track:4Q4Ls7zuq2IVSdtJfNmNdd,0.002,81
"#;
        let rows = parse_dataset_text(csv, b',').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            DatasetRow::new(
                "Welcome To New York (Taylor's Version)",
                "4WUepByoeqcedHoYhSNHRt"
            )
        );
        assert_eq!(rows[1].title.as_deref(), Some("Style (Taylor's Version)"));
    }

    #[test]
    fn test_parse_tsv_with_alternate_headers() {
        let tsv = "Title\tTrack_ID\nMine\tt1\nSparks Fly\tt2\n";
        let rows = parse_dataset_text(tsv, b'\t').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], DatasetRow::new("Sparks Fly", "t2"));
    }

    #[test]
    fn test_missing_cells_become_none() {
        let csv = "name,id\n,t1\nMine,\nShort\n";
        let rows = parse_dataset_text(csv, b',').unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].title, None);
        assert_eq!(rows[0].identifier.as_deref(), Some("t1"));
        assert_eq!(rows[1].identifier, None);
        assert_eq!(rows[2].identifier, None);
    }

    #[test]
    fn test_missing_title_column() {
        let csv = "album,id\n1989,t1\n";
        let err = parse_dataset_text(csv, b',').unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("title", _)));
    }

    #[test]
    fn test_missing_id_column() {
        let csv = "name,album\nMine,Speak Now\n";
        let err = parse_dataset_text(csv, b',').unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("identifier", _)));
    }

    #[test]
    fn test_header_only() {
        let rows = parse_dataset_text("name,id\n", b',').unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.csv");
        std::fs::write(&path, "name,id\nMine,t1\n").unwrap();

        let rows = load_dataset_file(&path, b',').unwrap();
        assert_eq!(rows, vec![DatasetRow::new("Mine", "t1")]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset_file(Path::new("/nonexistent/songs.csv"), b',').unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
