//! Publication domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::serde_ids::{null_as_empty, string_or_number};
use crate::Author;

/// Lifecycle state of a publication
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    #[default]
    Draft,
    Published,
    UnderReview,
}

impl PublicationStatus {
    pub const ALL: [PublicationStatus; 3] = [
        PublicationStatus::Draft,
        PublicationStatus::Published,
        PublicationStatus::UnderReview,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationStatus::Draft => "draft",
            PublicationStatus::Published => "published",
            PublicationStatus::UnderReview => "under_review",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(PublicationStatus::Draft),
            "published" => Ok(PublicationStatus::Published),
            "under_review" | "under-review" => Ok(PublicationStatus::UnderReview),
            other => Err(format!("unknown publication status: {other}")),
        }
    }
}

/// A publication record as held by the store and exchanged with the backend
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    /// Body text, may contain markup
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub authors: Vec<Author>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: PublicationStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub user_id: String,
}

impl Publication {
    /// Materialize a draft under the given id, stamping both timestamps with `now`
    pub fn from_draft(id: impl Into<String>, draft: PublicationDraft, now: DateTime<Utc>) -> Self {
        let PublicationDraft {
            title,
            abstract_text,
            content,
            authors,
            year,
            doi,
            journal,
            keywords,
            categories,
            status,
            user_id,
        } = draft;
        Self {
            id: id.into(),
            title,
            abstract_text,
            content,
            authors,
            year,
            doi,
            journal,
            keywords,
            categories,
            file_path: None,
            file_name: None,
            status,
            created_at: now,
            updated_at: now,
            user_id,
        }
    }

    /// Apply a partial update and refresh `updated_at`
    pub fn apply(&mut self, patch: PublicationPatch, now: DateTime<Utc>) {
        let PublicationPatch {
            title,
            abstract_text,
            content,
            authors,
            year,
            doi,
            journal,
            keywords,
            categories,
            status,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(abstract_text) = abstract_text {
            self.abstract_text = abstract_text;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(authors) = authors {
            self.authors = authors;
        }
        if let Some(year) = year {
            self.year = year;
        }
        if doi.is_some() {
            self.doi = doi;
        }
        if journal.is_some() {
            self.journal = journal;
        }
        if let Some(keywords) = keywords {
            self.keywords = keywords;
        }
        if let Some(categories) = categories {
            self.categories = categories;
        }
        if let Some(status) = status {
            self.status = status;
        }
        self.updated_at = now;
    }

    /// Author display names joined for one-line rendering
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A publication before it has an id or timestamps
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationDraft {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub content: String,
    pub authors: Vec<Author>,
    pub year: i32,
    pub doi: Option<String>,
    pub journal: Option<String>,
    pub keywords: Vec<String>,
    pub categories: Vec<String>,
    pub status: PublicationStatus,
    pub user_id: String,
}

impl PublicationDraft {
    /// Create a draft with the required fields
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
            year,
            ..Default::default()
        }
    }

    /// Add a keyword; blank and duplicate entries are ignored
    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        push_unique(&mut self.keywords, keyword)
    }

    /// Add a category; duplicate entries are ignored
    pub fn add_category(&mut self, category: &str) -> bool {
        push_unique(&mut self.categories, category)
    }
}

/// Partial update of a publication. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationPatch {
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub content: Option<String>,
    pub authors: Option<Vec<Author>>,
    pub year: Option<i32>,
    pub doi: Option<String>,
    pub journal: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub status: Option<PublicationStatus>,
}

/// Push a trimmed value unless it is blank or already present.
pub(crate) fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}
