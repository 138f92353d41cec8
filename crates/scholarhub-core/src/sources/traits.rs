//! Common traits for publication sources

use scholarhub_domain::{Publication, PublicationDraft, Registration, User};
use std::future::Future;
use thiserror::Error;

use super::backend::{Attachment, LoginResponse};
use crate::error::BackendError;
use crate::http::HttpError;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Source returned no publications")]
    Empty,
}

/// Metadata about a source
pub struct SourceMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Anything that can supply the initial publication collection
pub trait PublicationSource {
    fn fetch_publications(
        &self,
    ) -> impl Future<Output = Result<Vec<Publication>, SourceError>> + Send;
}

/// Remote operations beyond the initial fetch
pub trait BackendApi {
    fn create_publication(
        &self,
        draft: &PublicationDraft,
        attachment: &Attachment,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<Publication>, BackendError>> + Send;

    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginResponse, BackendError>> + Send;

    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<User, BackendError>> + Send;
}
