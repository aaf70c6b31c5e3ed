use serde::{Deserialize, Serialize};

/// Base URL for track playback links
pub const PLAYBACK_URL_BASE: &str = "https://open.spotify.com/track/";

/// Stable identifier for a track in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Playback link for this track
    #[must_use]
    pub fn playback_url(&self) -> String {
        format!("{PLAYBACK_URL_BASE}{}", self.0)
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the mapping a query is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Query is (part of) a title; results lead with the title
    #[value(alias = "long")]
    LongToShort,
    /// Query is (part of) a short form; results lead with the short form
    #[value(alias = "short")]
    ShortToLong,
}

impl Direction {
    /// Map the web form's `choice` field: `long` searches titles, anything else short forms.
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        if choice == "long" {
            Self::LongToShort
        } else {
            Self::ShortToLong
        }
    }

    /// The form value for this direction
    #[must_use]
    pub fn as_choice(self) -> &'static str {
        match self {
            Self::LongToShort => "long",
            Self::ShortToLong => "short",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LongToShort => write!(f, "long-to-short"),
            Self::ShortToLong => write!(f, "short-to-long"),
        }
    }
}

/// How a result was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Case-insensitive substring hit
    Exact,
    /// Similarity-ranked fallback hit
    Fuzzy,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_url() {
        let id = TrackId::new("3CeCwYWvdfXbZLXFhBrbnf");
        assert_eq!(
            id.playback_url(),
            "https://open.spotify.com/track/3CeCwYWvdfXbZLXFhBrbnf"
        );
    }

    #[test]
    fn test_direction_from_choice() {
        assert_eq!(Direction::from_choice("long"), Direction::LongToShort);
        assert_eq!(Direction::from_choice("short"), Direction::ShortToLong);
        assert_eq!(Direction::from_choice(""), Direction::ShortToLong);
        assert_eq!(Direction::from_choice("LONG"), Direction::ShortToLong);
    }

    #[test]
    fn test_match_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchKind::Exact).unwrap(),
            "\"exact\""
        );
        assert_eq!(
            serde_json::to_string(&MatchKind::Fuzzy).unwrap(),
            "\"fuzzy\""
        );
        assert_eq!(MatchKind::Fuzzy.to_string(), "fuzzy");
    }
}
