//! Short-form generation for song titles.
//!
//! A short form is built from the initials of a title's words. Parenthesized
//! groups are abbreviated separately and keep their parentheses, and two
//! common release annotations collapse to fixed tags:
//!
//! | Group content                     | Tag     |
//! |-----------------------------------|---------|
//! | contains `Taylor` and `Version`   | `(TV)`  |
//! | contains `From The Vault`         | `(FTV)` |
//!
//! ## Example
//!
//! ```rust
//! use taytay::abbreviation::abbreviate;
//!
//! assert_eq!(abbreviate("Closure (Taylor's Version)"), "C(TV)");
//! assert_eq!(abbreviate("All Too Well (10 Minute Version) (From The Vault)"), "ATW(1MV)(FTV)");
//! assert_eq!(abbreviate("I Almost Do"), "AD");
//! ```

pub mod segment;
pub mod token;

use segment::{split_segments, Segment};
use token::words;

/// Tag for re-recorded releases
pub const TAYLORS_VERSION_TAG: &str = "(TV)";

/// Tag for previously unreleased tracks
pub const FROM_THE_VAULT_TAG: &str = "(FTV)";

/// Words that never contribute an initial (compared lowercase)
const STOPWORDS: [&str; 2] = ["feat", "+"];

/// Generate the short form of a title.
///
/// Never fails: titles without any words produce an empty string, and a
/// parenthesized group without words still produces `()`.
#[must_use]
pub fn abbreviate(title: &str) -> String {
    split_segments(title)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => initials(text),
            Segment::Parenthesized(inner) => abbreviate_group(inner.trim()),
        })
        .collect()
}

fn abbreviate_group(inner: &str) -> String {
    if inner.contains("Taylor") && inner.contains("Version") {
        TAYLORS_VERSION_TAG.to_string()
    } else if inner.contains("From The Vault") {
        FROM_THE_VAULT_TAG.to_string()
    } else {
        format!("({})", initials(inner))
    }
}

/// Uppercased first characters of every non-stopword word
fn initials(text: &str) -> String {
    words(text)
        .into_iter()
        .filter(|word| !STOPWORDS.contains(&word.to_ascii_lowercase().as_str()))
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
