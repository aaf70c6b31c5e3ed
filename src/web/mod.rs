//! Web server for browser-based search.
//!
//! This module provides a small search page and a JSON API using Axum. The
//! catalog is loaded once at startup and shared read-only between requests.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080 with ./taylor.csv
//! taytay serve
//!
//! # Custom dataset, port, and auto-open browser
//! taytay serve --dataset songs.tsv --port 3000 --open
//! ```
//!
//! ## Endpoints
//!
//! - `GET /` - Search page
//! - `POST /search` - Search from form fields `user_input` and `choice` (`long` or `short`)
//! - `GET /api/search?q=...&direction=long|short` - Same search, query-string form
//! - `GET /api/catalog` - List all songs in the catalog
//!
//! A blank query returns no results and reports the query as `(empty)`.

pub mod server;
