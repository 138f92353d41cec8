//! Per-user publication counts

use scholarhub_domain::{Publication, PublicationStatus};
use serde::Serialize;

use crate::sort::{self, SortKey};
use crate::store::PublicationStore;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    pub under_review: usize,
}

impl DashboardSummary {
    pub fn from_publications<'a>(publications: impl IntoIterator<Item = &'a Publication>) -> Self {
        let mut summary = Self::default();
        for p in publications {
            summary.total += 1;
            match p.status {
                PublicationStatus::Published => summary.published += 1,
                PublicationStatus::Draft => summary.drafts += 1,
                PublicationStatus::UnderReview => summary.under_review += 1,
            }
        }
        summary
    }
}

/// Summary and most recent records owned by `user_id`
pub fn dashboard(store: &PublicationStore, user_id: &str) -> (DashboardSummary, Vec<Publication>) {
    let owned: Vec<Publication> = store.owned_by(user_id).cloned().collect();
    let summary = DashboardSummary::from_publications(&owned);
    (summary, sort::sort(&owned, SortKey::Recent))
}
