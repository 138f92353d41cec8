//! Sort stage for listing screens.
//!
//! All orderings are stable: records comparing equal on the chosen key keep
//! their relative input order.

use scholarhub_domain::Publication;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Ordering applied to a listing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest `created_at` first
    #[default]
    Recent,
    /// Oldest `created_at` first
    Oldest,
    /// Title A-Z, collated
    Title,
    /// Highest publication year first
    Year,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Recent, SortKey::Oldest, SortKey::Title, SortKey::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Oldest => "oldest",
            SortKey::Title => "title",
            SortKey::Year => "year",
        }
    }

    /// Compare two records under this key
    pub fn compare(&self, a: &Publication, b: &Publication) -> Ordering {
        match self {
            SortKey::Recent => b.created_at.cmp(&a.created_at),
            SortKey::Oldest => a.created_at.cmp(&b.created_at),
            SortKey::Title => compare_titles(&a.title, &b.title),
            SortKey::Year => b.year.cmp(&a.year),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recent" => Ok(SortKey::Recent),
            "oldest" => Ok(SortKey::Oldest),
            "title" => Ok(SortKey::Title),
            "year" => Ok(SortKey::Year),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Return a sorted copy of `publications`
pub fn sort(publications: &[Publication], key: SortKey) -> Vec<Publication> {
    let mut sorted = publications.to_vec();
    // slice::sort_by is a stable merge sort
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// Collation key: accents stripped, case folded.
pub fn collation_key(title: &str) -> String {
    title
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style title comparison. Falls back to the raw text so that titles
/// differing only by accent or case still order deterministically.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
