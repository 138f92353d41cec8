//! scholarhub HTTP backend
//!
//! Endpoints, relative to the configured base URL:
//! - `GET  /publications`: JSON array of publications
//! - `POST /publications`: multipart create with an attached document
//! - `POST /auth/login`: `{email, password}` to `{access_token, user}`
//! - `POST /users`: registration, returns the created user

use reqwest::multipart::{Form, Part};
use scholarhub_domain::{Publication, PublicationDraft, Registration, User};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::traits::{BackendApi, PublicationSource, SourceError, SourceMetadata};
use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::http::{HttpClient, HttpError, HttpResponse};

/// Fallback message when a create is rejected without a readable body
pub const CREATE_FAILED: &str = "Could not create the publication.";

/// A document attached to a new publication
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Read a file from disk, guessing the MIME type from its extension
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let mime = guess_mime(&file_name).map(str::to_string);
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }
}

fn guess_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        "txt" => Some("text/plain"),
        _ => None,
    }
}

/// Successful login payload
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<ErrorMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

/// Pull a human-readable message out of a JSON error body
pub fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message? {
        ErrorMessage::One(m) => m,
        ErrorMessage::Many(ms) => ms.join("; "),
    };
    (!message.trim().is_empty()).then_some(message)
}

/// Client for the scholarhub REST backend
pub struct BackendClient {
    http: HttpClient,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = HttpClient::new(&config.user_agent, config.timeout())?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn metadata() -> SourceMetadata {
        SourceMetadata {
            id: "backend",
            name: "scholarhub API",
            description: "Remote publication service",
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Parse a publication listing; a non-array or empty payload is an error
    pub fn parse_publications(body: &str) -> Result<Vec<Publication>, SourceError> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| SourceError::Parse(format!("Invalid publications JSON: {e}")))?;
        if !value.is_array() {
            return Err(SourceError::Parse("Expected a JSON array".to_string()));
        }
        let publications: Vec<Publication> = serde_json::from_value(value)
            .map_err(|e| SourceError::Parse(format!("Invalid publication record: {e}")))?;
        if publications.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(publications)
    }

    async fn get_publications(&self) -> Result<HttpResponse, HttpError> {
        self.http.get(&self.endpoint("publications")).await
    }
}

impl PublicationSource for BackendClient {
    async fn fetch_publications(&self) -> Result<Vec<Publication>, SourceError> {
        let response = self.get_publications().await?;
        if !response.is_success() {
            return Err(SourceError::Status(response.status));
        }
        Self::parse_publications(&response.body)
    }
}

impl BackendApi for BackendClient {
    /// Create a publication with an attached document.
    ///
    /// Returns the created record when the backend echoes one back.
    async fn create_publication(
        &self,
        draft: &PublicationDraft,
        attachment: &Attachment,
        user_id: &str,
    ) -> Result<Option<Publication>, BackendError> {
        let form = build_create_form(draft, attachment, user_id)?;
        let url = self.endpoint("publications");
        tracing::info!(url = %url, title = %draft.title, "creating publication");

        let response = self.http.post_multipart(&url, form).await?;
        if !response.is_success() {
            let message =
                error_message(&response.body).unwrap_or_else(|| CREATE_FAILED.to_string());
            tracing::warn!(status = response.status, message = %message, "create rejected");
            return Err(BackendError::Rejected {
                status: response.status,
                message,
            });
        }
        Ok(serde_json::from_str(&response.body).ok())
    }

    /// Exchange credentials for an access token
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, BackendError> {
        let url = self.endpoint("auth/login");
        let response = self
            .http
            .post_json(&url, &LoginRequest { email, password })
            .await?;
        if !response.is_success() {
            tracing::info!(status = response.status, "login rejected");
            return Err(BackendError::InvalidCredentials);
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Create an account. The backend does not issue a token here.
    async fn register(&self, registration: &Registration) -> Result<User, BackendError> {
        let url = self.endpoint("users");
        let response = self.http.post_json(&url, registration).await?;
        if !response.is_success() {
            tracing::info!(status = response.status, "registration rejected");
            return Err(BackendError::Registration);
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Multipart payload for `POST /publications`
pub fn build_create_form(
    draft: &PublicationDraft,
    attachment: &Attachment,
    user_id: &str,
) -> Result<Form, BackendError> {
    let mut file = Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone());
    if let Some(mime) = &attachment.mime {
        file = file.mime_str(mime).map_err(|e| {
            BackendError::Http(HttpError::RequestFailed {
                message: e.to_string(),
            })
        })?;
    }

    Ok(Form::new()
        .text("title", draft.title.clone())
        .text("abstract", draft.abstract_text.clone())
        .text("content", draft.content.clone())
        .text("year", draft.year.to_string())
        .text("doi", draft.doi.clone().unwrap_or_default())
        .text("journal", draft.journal.clone().unwrap_or_default())
        .text("keywords", serde_json::to_string(&draft.keywords)?)
        .text("categories", serde_json::to_string(&draft.categories)?)
        .text("status", draft.status.as_str())
        .part("file", file)
        .text("userId", user_id.to_string()))
}
