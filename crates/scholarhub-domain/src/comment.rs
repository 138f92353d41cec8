//! Reader comments on a publication

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::User;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub publication_id: String,
    pub user_id: String,
    pub user: User,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a comment by `user`; content is trimmed, and blank content yields `None`
    pub fn new(
        id: impl Into<String>,
        publication_id: impl Into<String>,
        user: User,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            id: id.into(),
            publication_id: publication_id.into(),
            user_id: user.id.clone(),
            user,
            content: content.to_string(),
            created_at,
        })
    }
}
