//! # taytay
//!
//! A library for mapping song titles to short-form abbreviations and back.
//!
//! Fans write song titles in shorthand: `C(TV)`, `LS`, `ATW(1MV)(FTV)`. `taytay`
//! generates those short forms deterministically from the full titles and
//! searches a catalog in either direction, so a title fragment finds its short
//! form and a short form finds its title.
//!
//! ## Features
//!
//! - **Deterministic abbreviation**: initials of each word, with release
//!   annotations collapsed to `(TV)` and `(FTV)` tags
//! - **Substring search**: case-insensitive containment over titles or short forms
//! - **Fuzzy fallback**: similarity-ranked matches when nothing contains the query
//! - **Playback links**: every result carries a link built from its track ID
//!
//! ## Example
//!
//! ```rust
//! use taytay::{abbreviate, build_catalog, Direction, MatchingEngine};
//! use taytay::parsing::dataset::DatasetRow;
//!
//! assert_eq!(abbreviate("Closure (Taylor's Version)"), "C(TV)");
//!
//! let catalog = build_catalog(vec![
//!     DatasetRow::new("Closure (Taylor's Version)", "t1"),
//!     DatasetRow::new("Love Story", "t2"),
//! ]);
//!
//! let engine = MatchingEngine::new(&catalog);
//! for m in engine.search("closure", Direction::LongToShort) {
//!     println!("{} -> {} ({}) {}", m.primary, m.secondary, m.kind, m.link);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`abbreviation`]: Short-form generation
//! - [`catalog`]: Song catalog storage and indexing
//! - [`core`]: Core data types for records, identifiers, and directions
//! - [`matching`]: Two-phase matching engine and similarity scoring
//! - [`parsing`]: CSV/TSV dataset loading
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based search

pub mod abbreviation;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod web;

// Re-export commonly used types for convenience
pub use abbreviation::abbreviate;
pub use catalog::store::{build_catalog, SongCatalog};
pub use core::record::SongRecord;
pub use core::types::*;
pub use matching::engine::{search, MatchResult, MatchingConfig, MatchingEngine};
