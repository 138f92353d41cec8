//! In-memory publication store for one session.
//!
//! Populated once (see [`crate::acquisition`]) and afterwards changed only by
//! the local add/update/delete operations. Searches and listings read a
//! snapshot and return new vectors.

use chrono::{DateTime, Utc};
use scholarhub_domain::{
    Publication, PublicationDraft, PublicationPatch, PublicationStatus, SearchCriteria,
};
use serde::Serialize;

use crate::query::{self, ListingFilter};
use crate::sort::{self, SortKey};

/// Where the current contents came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreOrigin {
    Remote,
    Fallback,
    Empty,
}

#[derive(Debug, Clone)]
pub struct PublicationStore {
    publications: Vec<Publication>,
    origin: StoreOrigin,
}

impl Default for PublicationStore {
    fn default() -> Self {
        Self {
            publications: Vec::new(),
            origin: StoreOrigin::Empty,
        }
    }
}

impl PublicationStore {
    pub fn new(publications: Vec<Publication>, origin: StoreOrigin) -> Self {
        Self {
            publications,
            origin,
        }
    }

    pub fn origin(&self) -> StoreOrigin {
        self.origin
    }

    pub fn all(&self) -> &[Publication] {
        &self.publications
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Publication> {
        query::find_by_id(&self.publications, id)
    }

    /// Search screen: filter only, store order kept
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Publication> {
        query::search(&self.publications, criteria)
    }

    /// Listing screen: quick filter, then sort
    pub fn listing(&self, filter: &ListingFilter, key: SortKey) -> Vec<Publication> {
        sort::sort(&filter.apply(&self.publications), key)
    }

    pub fn owned_by<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Publication> + 'a {
        self.publications.iter().filter(move |p| p.user_id == user_id)
    }

    /// Add a locally created publication at the front of the store
    pub fn add(&mut self, draft: PublicationDraft) -> Publication {
        self.add_at(draft, Utc::now())
    }

    /// [`add`](Self::add) with an explicit clock
    pub fn add_at(&mut self, draft: PublicationDraft, now: DateTime<Utc>) -> Publication {
        let id = self.allocate_id(now);
        let publication = Publication::from_draft(id, draft, now);
        tracing::debug!(id = %publication.id, "added publication");
        self.publications.insert(0, publication.clone());
        publication
    }

    /// Put a server-confirmed record at the front, replacing any record with
    /// the same id.
    pub fn insert_front(&mut self, publication: Publication) {
        self.publications.retain(|p| p.id != publication.id);
        self.publications.insert(0, publication);
    }

    /// Apply a patch; returns `false` when no record has `id`
    pub fn update(&mut self, id: &str, patch: PublicationPatch) -> bool {
        self.update_at(id, patch, Utc::now())
    }

    pub fn update_at(&mut self, id: &str, patch: PublicationPatch, now: DateTime<Utc>) -> bool {
        match self.publications.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.apply(patch, now);
                true
            }
            None => false,
        }
    }

    /// Remove a record; returns `false` when no record has `id`
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.publications.len();
        self.publications.retain(|p| p.id != id);
        before != self.publications.len()
    }

    pub fn count_by_status(&self, status: PublicationStatus) -> usize {
        self.publications.iter().filter(|p| p.status == status).count()
    }

    /// Millisecond timestamp id, bumped until unused
    fn allocate_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}
