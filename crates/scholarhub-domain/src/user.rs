//! User and author representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::serde_ids::string_or_number;

/// Role tag attached to an account
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    #[default]
    #[serde(rename = "autor")]
    Author,
    #[serde(rename = "revisor")]
    Reviewer,
    #[serde(rename = "investigador")]
    Researcher,
}

impl UserRole {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Author => "autor",
            UserRole::Reviewer => "revisor",
            UserRole::Researcher => "investigador",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "autor" | "author" => Ok(UserRole::Author),
            "revisor" | "reviewer" => Ok(UserRole::Reviewer),
            "investigador" | "researcher" => Ok(UserRole::Researcher),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// An account holder. Publications reference their authors as users.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(flatten)]
    pub links: ResearchLinks,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Author of a publication
pub type Author = User;

/// Public research profiles a user may link from their profile
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_scholar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(
        default,
        rename = "otrasRedes",
        skip_serializing_if = "Option::is_none"
    )]
    pub other_networks: Option<String>,
}

impl User {
    /// Create a user with the required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            affiliation: String::new(),
            role: UserRole::default(),
            bio: None,
            profile_image: None,
            links: ResearchLinks::default(),
            created_at: Utc::now(),
        }
    }

    /// Builder method to set the affiliation
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    /// Builder method to set the role
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Name shown wherever the user appears as an author
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Apply a partial profile update in place
    pub fn apply(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            name,
            email,
            affiliation,
            role,
            bio,
            profile_image,
            links,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(affiliation) = affiliation {
            self.affiliation = affiliation;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if bio.is_some() {
            self.bio = bio;
        }
        if profile_image.is_some() {
            self.profile_image = profile_image;
        }
        if let Some(links) = links {
            self.links = links;
        }
    }
}

/// Partial update of a user's profile. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub affiliation: Option<String>,
    pub role: Option<UserRole>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub links: Option<ResearchLinks>,
}

/// Data submitted when creating an account
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub affiliation: String,
    pub role: UserRole,
}
