//! Plain-text summary export

use lazy_static::lazy_static;
use regex::Regex;
use scholarhub_domain::Publication;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Word,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Word => "docx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Pdf => f.write_str("pdf"),
            ExportFormat::Word => f.write_str("word"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "word" | "docx" => Ok(ExportFormat::Word),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

lazy_static! {
    static ref MARKUP_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Remove every `<...>` tag, keeping the text between them
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

/// Title, authors, abstract and the body with markup removed, as plain text
pub fn summary_text(publication: &Publication) -> String {
    format!(
        "Title: {}\n\nAuthors: {}\n\nAbstract: {}\n\nContent: {}",
        publication.title,
        publication.author_names(),
        publication.abstract_text,
        strip_markup(&publication.content)
    )
}

/// Suggested file name: every non-alphanumeric ASCII character becomes `_`
pub fn export_file_name(publication: &Publication, format: ExportFormat) -> String {
    let stem: String = publication
        .title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}.{}", format.extension())
}
