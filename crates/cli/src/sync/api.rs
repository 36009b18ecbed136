// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the dictionary server's HTTP API.
//!
//! Provides a trait-based API layer that enables:
//! - Real HTTP requests for production ([`HttpApi`], via reqwest)
//! - Mock APIs for unit testing

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use hd_core::{Category, Term};
use serde::de::DeserializeOwned;

/// Category listing endpoint.
pub const CATEGORIES_PATH: &str = "/api/categories";
/// Term listing endpoint.
pub const TERMS_PATH: &str = "/api/terms";
/// Feedback submission endpoint.
pub const FEEDBACK_PATH: &str = "/api/feedback";

/// Error type for API requests.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The response body was not what the endpoint promises.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The status of a final refusal: a 4xx other than 408 and 429.
    ///
    /// `None` means the same request may succeed later.
    pub fn refusal(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) if (400..500).contains(code) && !matches!(code, 408 | 429) => {
                Some(*code)
            }
            _ => None,
        }
    }
}

/// Result type for API requests.
pub type ApiResult<T> = Result<T, ApiError>;

/// Boxed future returned by [`DictionaryApi`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = ApiResult<T>> + Send + 'a>>;

/// The server endpoints the offline client consumes.
///
/// Methods take `&self` so independent requests can be in flight at once.
pub trait DictionaryApi: Send + Sync {
    /// `GET /api/categories`.
    fn fetch_categories(&self) -> ApiFuture<'_, Vec<Category>>;

    /// `GET /api/terms`.
    fn fetch_terms(&self) -> ApiFuture<'_, Vec<Term>>;

    /// `POST /api/feedback`; any 2xx status counts as accepted.
    fn submit_feedback(&self, body: serde_json::Value) -> ApiFuture<'_, ()>;
}

/// HTTP implementation using reqwest.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client for the server at `base_url`.
    ///
    /// `timeout` bounds each request from connect to end of body.
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(HttpApi {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl DictionaryApi for HttpApi {
    fn fetch_categories(&self) -> ApiFuture<'_, Vec<Category>> {
        Box::pin(self.get_json(CATEGORIES_PATH))
    }

    fn fetch_terms(&self) -> ApiFuture<'_, Vec<Term>> {
        Box::pin(self.get_json(TERMS_PATH))
    }

    fn submit_feedback(&self, body: serde_json::Value) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            let url = self.url(FEEDBACK_PATH);
            tracing::debug!(%url, "POST");

            let response = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(ApiError::Status(status.as_u16()))
            }
        })
    }
}
