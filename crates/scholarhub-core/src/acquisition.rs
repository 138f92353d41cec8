//! Store population: fetch from a source, fall back to the built-in dataset.
//!
//! Any failure of the primary source (transport error, non-2xx status,
//! malformed or empty payload) is absorbed. The caller always receives a
//! populated store and can inspect [`PublicationStore::origin`].

use crate::sources::{fallback_publications, PublicationSource};
use crate::store::{PublicationStore, StoreOrigin};

/// Populate a store from `source`, substituting the fallback dataset on failure
pub async fn acquire<S: PublicationSource>(source: &S) -> PublicationStore {
    match source.fetch_publications().await {
        Ok(publications) if !publications.is_empty() => {
            tracing::info!(count = publications.len(), "loaded publications from source");
            PublicationStore::new(publications, StoreOrigin::Remote)
        }
        Ok(_) => {
            tracing::warn!("source returned no publications, using built-in dataset");
            fallback_store()
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load publications, using built-in dataset");
            fallback_store()
        }
    }
}

/// Store holding only the built-in dataset
pub fn fallback_store() -> PublicationStore {
    PublicationStore::new(fallback_publications(), StoreOrigin::Fallback)
}
