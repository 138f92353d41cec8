//! HTTP client abstraction for backend calls

pub mod native;

pub use native::*;

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Timeout")]
    Timeout,
    #[error("Parse error: {message}")]
    ParseError { message: String },
    #[error("Could not build HTTP client: {message}")]
    Client { message: String },
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            body: String::new(),
            headers: HashMap::new(),
        }
    }

    #[test]
    fn test_is_success() {
        assert!(response(200).is_success());
        assert!(response(201).is_success());
        assert!(!response(304).is_success());
        assert!(!response(500).is_success());
    }
}
