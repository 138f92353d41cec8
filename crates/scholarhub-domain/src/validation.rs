//! Validation for drafts and search criteria

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{PublicationDraft, SearchCriteria};

/// Earliest year accepted by the publication form
pub const MIN_YEAR: i32 = 1900;

/// Severity of a validation error
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A validation error or warning
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    pub fn error(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Error,
        }
    }

    pub fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, ValidationSeverity::Error)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a draft and return errors/warnings
pub fn validate_draft(draft: &PublicationDraft, current_year: i32) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Required fields
    if draft.title.trim().is_empty() {
        errors.push(ValidationError::error("title", "Title is required"));
    }

    if draft.abstract_text.trim().is_empty() {
        errors.push(ValidationError::error("abstract", "Abstract is required"));
    }

    if draft.year < MIN_YEAR || draft.year > current_year {
        errors.push(ValidationError::warning(
            "year",
            format!("Year should be between {MIN_YEAR} and {current_year}"),
        ));
    }

    if let Some(doi) = draft.doi.as_deref().filter(|d| !d.is_empty()) {
        if !doi.starts_with("10.") {
            errors.push(ValidationError::warning("doi", "DOI should start with '10.'"));
        }
    }

    errors
}

/// Check search criteria; an inverted year range can never match
pub fn validate_criteria(criteria: &SearchCriteria) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let n = criteria.normalized();

    if let (Some(from), Some(to)) = (n.year_from, n.year_to) {
        if from > to {
            errors.push(ValidationError::warning(
                "yearFrom",
                format!("Year range {from}-{to} is empty"),
            ));
        }
    }

    errors
}

/// Check if a draft is valid (no errors)
pub fn is_valid(draft: &PublicationDraft, current_year: i32) -> bool {
    validate_draft(draft, current_year)
        .iter()
        .all(|e| !e.is_error())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_draft() {
        let errors = validate_draft(&PublicationDraft::default(), 2025);
        assert!(errors.iter().any(|e| e.field == "title" && e.is_error()));
        assert!(errors.iter().any(|e| e.field == "abstract" && e.is_error()));
        assert!(errors.iter().any(|e| e.field == "year" && !e.is_error()));
    }

    #[test]
    fn test_is_valid() {
        let valid = PublicationDraft::new("Title", "Abstract", 2024);
        assert!(is_valid(&valid, 2025));

        let mut warned = valid.clone();
        warned.doi = Some("doi.org/123".to_string());
        assert!(is_valid(&warned, 2025));
        assert_eq!(validate_draft(&warned, 2025).len(), 1);

        assert!(!is_valid(&PublicationDraft::default(), 2025));
    }

    #[test]
    fn test_inverted_year_range() {
        let c = SearchCriteria::new().with_year_from(2025).with_year_to(2020);
        let errors = validate_criteria(&c);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].severity, ValidationSeverity::Warning);
        assert!(validate_criteria(&SearchCriteria::new().with_year_from(2020)).is_empty());
    }
}
