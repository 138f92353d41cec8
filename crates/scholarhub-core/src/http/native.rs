//! Native HTTP client using reqwest

use super::{HttpError, HttpResponse};
use reqwest::{multipart::Form, Client, RequestBuilder};
use serde::Serialize;
use std::time::Duration;

pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.send(self.client.get(url)).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<HttpResponse, HttpError> {
        self.send(self.client.post(url).json(body)).await
    }

    pub async fn post_multipart(&self, url: &str, form: Form) -> Result<HttpResponse, HttpError> {
        self.send(self.client.post(url).multipart(form)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<HttpResponse, HttpError> {
        let response = request
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status().as_u16();

        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();

        let body = response.text().await.map_err(|e| HttpError::ParseError {
            message: e.to_string(),
        })?;

        tracing::debug!(status, bytes = body.len(), "backend response");

        Ok(HttpResponse {
            status,
            body,
            headers,
        })
    }
}

fn map_send_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        return HttpError::Timeout;
    }
    if e.is_builder() {
        return HttpError::InvalidUrl {
            url: e.url().map(|u| u.to_string()).unwrap_or_default(),
        };
    }
    HttpError::RequestFailed {
        message: e.to_string(),
    }
}
