//! Loaders for song datasets.
//!
//! A dataset is a delimited text file (CSV or TSV) with a header row. Only two
//! columns are read:
//!
//! | Column     | Accepted headers              | Required |
//! |------------|-------------------------------|----------|
//! | Title      | `name`, `title`, `song`       | Yes      |
//! | Identifier | `id`, `identifier`, `track_id`| Yes      |
//!
//! Header matching is case-insensitive. Any other columns are ignored.
//!
//! ## Example
//!
//! ```rust
//! use taytay::parsing::dataset::parse_dataset_text;
//!
//! let rows = parse_dataset_text("name,id\nMine,t1\n", b',').unwrap();
//! assert_eq!(rows[0].title.as_deref(), Some("Mine"));
//! ```

pub mod dataset;
