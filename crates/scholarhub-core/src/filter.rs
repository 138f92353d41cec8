//! Filter predicate engine.
//!
//! Evaluates one publication against one set of [`SearchCriteria`]. Every
//! criterion that is present must hold (logical AND); absent criteria are
//! vacuously satisfied.
//!
//! | criterion    | holds when                                                  |
//! |--------------|-------------------------------------------------------------|
//! | `query`      | lower-cased query is in the title, abstract or any keyword  |
//! | `author`     | lower-cased text is in at least one author's display name   |
//! | `year_from`  | `year >= year_from`                                         |
//! | `year_to`    | `year <= year_to`                                           |
//! | `categories` | at least one category is shared (match-any)                 |
//! | `keywords`   | never consulted                                             |

use scholarhub_domain::{Publication, SearchCriteria};

/// Whether `publication` satisfies every present criterion.
///
/// Accepts un-normalized criteria: empty strings, empty lists and zero year
/// bounds are treated as absent.
pub fn matches(publication: &Publication, criteria: &SearchCriteria) -> bool {
    if let Some(query) = present(&criteria.query) {
        if !matches_query(publication, &query.to_lowercase()) {
            return false;
        }
    }

    if let Some(author) = present(&criteria.author) {
        if !matches_author(publication, &author.to_lowercase()) {
            return false;
        }
    }

    if let Some(from) = criteria.year_from.filter(|y| *y != 0) {
        if publication.year < from {
            return false;
        }
    }

    if let Some(to) = criteria.year_to.filter(|y| *y != 0) {
        if publication.year > to {
            return false;
        }
    }

    if let Some(categories) = criteria.categories.as_deref().filter(|c| !c.is_empty()) {
        if !categories.iter().any(|c| publication.categories.contains(c)) {
            return false;
        }
    }

    true
}

/// Build a reusable predicate closure for iterator adapters.
pub fn predicate(criteria: &SearchCriteria) -> impl Fn(&Publication) -> bool + '_ {
    move |p| matches(p, criteria)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// `needle` must already be lower-cased.
fn matches_query(publication: &Publication, needle: &str) -> bool {
    publication.title.to_lowercase().contains(needle)
        || publication.abstract_text.to_lowercase().contains(needle)
        || publication
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(needle))
}

fn matches_author(publication: &Publication, needle: &str) -> bool {
    publication
        .authors
        .iter()
        .any(|a| a.display_name().to_lowercase().contains(needle))
}
