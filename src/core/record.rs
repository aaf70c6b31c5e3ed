use serde::{Deserialize, Serialize};

use crate::abbreviation::abbreviate;
use crate::core::types::TrackId;

/// A song in the catalog.
///
/// Fields are read-only so the short form always matches the title:
///
/// ```compile_fail
/// use taytay::SongRecord;
///
/// let mut record = SongRecord::new("Mine", "t1");
/// record.short_form = "X".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Long-form title as it appears in the dataset
    title: String,

    /// Generated abbreviation of `title`
    short_form: String,

    /// Stable identifier used for playback links
    id: TrackId,
}

impl SongRecord {
    /// Build a record, deriving the short form from the title
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Self {
        let title = title.into();
        let short_form = abbreviate(&title);
        Self {
            title,
            short_form,
            id: TrackId::new(id),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn short_form(&self) -> &str {
        &self.short_form
    }

    pub fn id(&self) -> &TrackId {
        &self.id
    }

    #[must_use]
    pub fn playback_url(&self) -> String {
        self.id.playback_url()
    }
}
