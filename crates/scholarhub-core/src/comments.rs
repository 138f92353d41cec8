//! Per-publication comment threads, held in memory for the session

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use scholarhub_domain::{Comment, User};

#[derive(Debug, Default)]
pub struct CommentBoard {
    threads: HashMap<String, Vec<Comment>>,
}

impl CommentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comments on a publication, newest first
    pub fn thread(&self, publication_id: &str) -> &[Comment] {
        self.threads
            .get(publication_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn add(&mut self, publication_id: &str, user: User, content: &str) -> Option<Comment> {
        self.add_at(publication_id, user, content, Utc::now())
    }

    /// Prepend a comment to the thread; blank content is ignored
    pub fn add_at(
        &mut self,
        publication_id: &str,
        user: User,
        content: &str,
        now: DateTime<Utc>,
    ) -> Option<Comment> {
        let id = self.allocate_id(now);
        let comment = Comment::new(id, publication_id, user, content, now)?;
        self.threads
            .entry(publication_id.to_string())
            .or_default()
            .insert(0, comment.clone());
        Some(comment)
    }

    /// Millisecond timestamp id, bumped until unused on any thread
    fn allocate_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.contains_id(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn contains_id(&self, id: &str) -> bool {
        self.threads.values().flatten().any(|c| c.id == id)
    }
}
