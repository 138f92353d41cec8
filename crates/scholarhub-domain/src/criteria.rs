//! Search criteria submitted by the search form
//!
//! Every field is optional. An empty string, an empty list, a zero year bound
//! and a missing value all mean "criterion absent".

use serde::{Deserialize, Serialize};

use crate::publication::push_unique;

/// Optional search parameters bundled from a single user action
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Matched against title, abstract and keywords
    pub query: Option<String>,
    /// Matched against author display names
    pub author: Option<String>,
    /// Inclusive lower year bound
    pub year_from: Option<i32>,
    /// Inclusive upper year bound
    pub year_to: Option<i32>,
    /// Match-any category set
    pub categories: Option<Vec<String>>,
    /// Collected by the form, never used as a predicate
    pub keywords: Option<Vec<String>>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_year_from(mut self, year: i32) -> Self {
        self.year_from = Some(year);
        self
    }

    pub fn with_year_to(mut self, year: i32) -> Self {
        self.year_to = Some(year);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Add a category if not already selected
    pub fn add_category(&mut self, category: &str) -> bool {
        push_unique(self.categories.get_or_insert_with(Vec::new), category)
    }

    pub fn remove_category(&mut self, category: &str) {
        if let Some(categories) = self.categories.as_mut() {
            categories.retain(|c| c != category);
        }
    }

    /// Add a trimmed keyword; blank and duplicate entries are ignored
    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        push_unique(self.keywords.get_or_insert_with(Vec::new), keyword)
    }

    pub fn remove_keyword(&mut self, keyword: &str) {
        if let Some(keywords) = self.keywords.as_mut() {
            keywords.retain(|k| k != keyword);
        }
    }

    /// Reset every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Collapse every "absent" spelling to `None`.
    ///
    /// Text is kept verbatim (no trimming) so that a whitespace query behaves
    /// as a literal substring.
    pub fn normalized(&self) -> Self {
        Self {
            query: non_empty(&self.query),
            author: non_empty(&self.author),
            year_from: self.year_from.filter(|y| *y != 0),
            year_to: self.year_to.filter(|y| *y != 0),
            categories: non_empty_list(&self.categories),
            keywords: non_empty_list(&self.keywords),
        }
    }

    /// Whether no predicate would be applied.
    ///
    /// Keywords are ignored here because they never filter.
    pub fn is_empty(&self) -> bool {
        let n = self.normalized();
        n.query.is_none()
            && n.author.is_none()
            && n.year_from.is_none()
            && n.year_to.is_none()
            && n.categories.is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn non_empty_list(value: &Option<Vec<String>>) -> Option<Vec<String>> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
