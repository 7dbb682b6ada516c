//! HTTP client for the vocabulary backend's read endpoints.

mod types;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::ClientConfig;
use vocab_quiz_core::types::{Entry, ListId, ListSummary, VocabList};

pub use types::{ApiColumn, ApiEntry, ApiFieldValue, ApiListDetail, ApiListSummary};

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Inner state shared across clones.
struct VocabApiInner {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Client for the list, list detail and entry endpoints.
///
/// Clone-able; all clones share one connection pool.
#[derive(Clone)]
pub struct VocabApi {
    inner: Arc<VocabApiInner>,
}

impl VocabApi {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(VocabApiInner {
                client,
                base_url: config.api_url.trim_end_matches('/').to_string(),
                token: config.token.clone(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Check if backend is reachable.
    pub async fn check_connectivity(&self) -> Result<bool, ApiError> {
        let url = format!("{}/health", self.inner.base_url);
        match self.inner.client.get(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// All lists visible to the current user.
    pub async fn list_vocab_lists(&self) -> Result<Vec<ListSummary>, ApiError> {
        let lists: Vec<ApiListSummary> = self.get_json("/vocablist/").await?;
        Ok(lists.into_iter().map(Into::into).collect())
    }

    /// One list's schema. The returned list has no entries.
    pub async fn get_vocab_list(&self, list_id: ListId) -> Result<VocabList, ApiError> {
        let detail: ApiListDetail = self.get_json(&format!("/vocablist/{}", list_id)).await?;
        Ok(detail.into_list(Vec::new()))
    }

    /// Every entry of a list.
    pub async fn get_entries(&self, list_id: ListId) -> Result<Vec<Entry>, ApiError> {
        let entries: Vec<ApiEntry> = self
            .get_json(&format!("/vocab/entries/list/{}", list_id))
            .await?;
        Ok(entries.into_iter().map(|e| e.into_entry(list_id)).collect())
    }

    /// Schema and entries of a list, fetched concurrently.
    pub async fn fetch_list(&self, list_id: ListId) -> Result<VocabList, ApiError> {
        let detail_path = format!("/vocablist/{}", list_id);
        let (detail, entries) = tokio::try_join!(
            self.get_json::<ApiListDetail>(&detail_path),
            self.get_entries(list_id),
        )?;
        Ok(detail.into_list(entries))
    }

    // === Private methods ===

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.inner.base_url, path);
        let request = self.inner.client.get(url);
        match &self.inner.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .get(path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(path, status, "backend request failed");
            return Err(ApiError::Backend { status, message });
        }

        resp.json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
