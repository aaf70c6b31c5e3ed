//! Song catalog storage and indexing.
//!
//! The catalog is built once from a dataset and is read-only afterwards. Each
//! record carries its title, the generated short form, and a track identifier.
//! Two [`FieldIndex`](index::FieldIndex)es hold the lowercased titles and short
//! forms so that searches in either direction scan the same structure.
//!
//! ## Example
//!
//! ```rust
//! use taytay::catalog::store::build_catalog;
//! use taytay::core::types::TrackId;
//! use taytay::parsing::dataset::DatasetRow;
//!
//! let catalog = build_catalog(vec![
//!     DatasetRow::new("Closure (Taylor's Version)", "t1"),
//!     DatasetRow::new("Mine", "t2"),
//! ]);
//!
//! assert_eq!(catalog.get(&TrackId::new("t1")).unwrap().short_form(), "C(TV)");
//! ```
//!
//! ## Exported Catalogs
//!
//! A built catalog can be written to JSON and loaded again. Short forms are
//! always regenerated on load, so an exported file can't carry stale ones.
//!
//! ```rust,no_run
//! use taytay::SongCatalog;
//! use std::path::Path;
//!
//! let catalog = SongCatalog::load_from_file(Path::new("taylor.csv")).unwrap();
//! std::fs::write("catalog.json", catalog.to_json().unwrap()).unwrap();
//! ```

pub mod index;
pub mod store;
