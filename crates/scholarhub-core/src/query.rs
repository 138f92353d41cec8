//! Query execution over a publication sequence.
//!
//! Both entry points are stable filters: results keep the relative order of
//! the input and the input is never modified.

use scholarhub_domain::{Publication, PublicationStatus, SearchCriteria};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::filter;

/// Run the search screen's criteria over `publications`.
///
/// Fully-absent criteria return every record unchanged.
pub fn search(publications: &[Publication], criteria: &SearchCriteria) -> Vec<Publication> {
    let criteria = criteria.normalized();
    if criteria.is_empty() {
        return publications.to_vec();
    }
    publications
        .iter()
        .filter(|p| filter::matches(p, &criteria))
        .cloned()
        .collect()
}

/// Status selector used by the listing screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(PublicationStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: PublicationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(s) => s.fmt(f),
        }
    }
}

/// The listing screen's quick filter: free text over title and abstract plus
/// a status selector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    pub text: String,
    pub status: StatusFilter,
}

impl ListingFilter {
    pub fn new(text: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }

    pub fn matches(&self, publication: &Publication) -> bool {
        let needle = self.text.to_lowercase();
        let text_ok = needle.is_empty()
            || publication.title.to_lowercase().contains(&needle)
            || publication.abstract_text.to_lowercase().contains(&needle);
        text_ok && self.status.accepts(publication.status)
    }

    pub fn apply(&self, publications: &[Publication]) -> Vec<Publication> {
        publications
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Look up a record by id. Not found is `None`.
pub fn find_by_id<'a>(publications: &'a [Publication], id: &str) -> Option<&'a Publication> {
    publications.iter().find(|p| p.id == id)
}
