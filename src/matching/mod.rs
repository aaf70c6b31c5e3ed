//! Two-phase song search.
//!
//! - [`MatchingEngine`](engine::MatchingEngine): searches a catalog in either direction
//! - [`MatchResult`](engine::MatchResult): one matched song, shaped for the direction
//! - [`similarity`]: matching-block similarity ratio and close-match ranking
//!
//! ## Matching Algorithm
//!
//! The query is trimmed and lowercased, then compared against the lowercased
//! titles (long-to-short) or short forms (short-to-long):
//!
//! 1. **Exact phase**: every record whose field contains the query, in catalog
//!    order. If this finds anything, the search stops here.
//! 2. **Fuzzy phase**: the fields scoring at least the similarity threshold
//!    (default 0.6), best first, at most five. Each field is resolved to the
//!    first record in catalog order that carries it.
//!
//! ## Example
//!
//! ```rust
//! use taytay::catalog::store::build_catalog;
//! use taytay::core::types::{Direction, MatchKind};
//! use taytay::matching::engine::MatchingEngine;
//! use taytay::parsing::dataset::DatasetRow;
//!
//! let catalog = build_catalog(vec![DatasetRow::new("Closure (Taylor's Version)", "t1")]);
//! let engine = MatchingEngine::new(&catalog);
//!
//! let matches = engine.search("c(tv)", Direction::ShortToLong);
//! assert_eq!(matches[0].secondary, "Closure (Taylor's Version)");
//! assert_eq!(matches[0].kind, MatchKind::Exact);
//! ```

pub mod engine;
pub mod similarity;
