//! Core data types shared by the catalog and the matching engine.
//!
//! - [`SongRecord`](record::SongRecord): a title, its short form, and a track identifier
//! - [`TrackId`](types::TrackId): identifier used to build playback links
//! - [`Direction`](types::Direction): whether a query is a title or a short form
//! - [`MatchKind`](types::MatchKind): whether a result came from the exact or fuzzy phase

pub mod record;
pub mod types;
