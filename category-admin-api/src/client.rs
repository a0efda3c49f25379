//! reqwest-backed collection API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::CategoryApi;
use crate::types::{Category, CategoryUpdate, NewCategory};

/// Path segment of the collection under the base URL.
pub const COLLECTION_SEGMENT: &str = "category";

const NOT_FOUND: u16 = 404;

/// Connection settings for [`HttpCategoryApi`].
///
/// Built once at startup and handed to the client; nothing reads the
/// environment after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Parse and validate a base URL such as `http://localhost:3000/api`.
    ///
    /// A trailing slash is optional. Only `http` and `https` are accepted.
    pub fn new(base_url: &str) -> Result<Self> {
        let invalid = |detail: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            detail,
        };

        let url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        Ok(Self {
            base_url: url,
            timeout: None,
        })
    }

    /// Apply a per-request timeout. Without one a hung request waits forever.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// `{base}/category`
    pub fn collection_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(COLLECTION_SEGMENT);
        }
        url
    }

    /// `{base}/category/{id}`, with `id` percent-encoded as one segment.
    pub fn item_url(&self, id: &str) -> Url {
        let mut url = self.collection_url();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        url
    }
}

/// HTTP implementation of [`CategoryApi`]
pub struct HttpCategoryApi {
    client: Client,
    config: ApiConfig,
}

impl HttpCategoryApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Encode a request body; failures map to `SerializationError`.
    fn encode_body<B: Serialize>(body: &B) -> Result<String> {
        serde_json::to_string(body).map_err(|e| ApiError::SerializationError {
            detail: e.to_string(),
        })
    }

    async fn send_json_body<B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &Url,
        body: &B,
    ) -> Result<Category> {
        let body_json = Self::encode_body(body)?;
        log::debug!("Request Body: {body_json}");

        let request = self
            .client
            .request(method.clone(), url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_json);

        let (status, text) =
            HttpUtils::execute_request(request, method.as_str(), url.as_str()).await?;
        let text = HttpUtils::ensure_success(status, text)?;
        HttpUtils::parse_json(&text)
    }
}

#[async_trait]
impl CategoryApi for HttpCategoryApi {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let url = self.config.collection_url();
        let (status, text) =
            HttpUtils::execute_request(self.client.get(url.clone()), "GET", url.as_str()).await?;
        let text = HttpUtils::ensure_success(status, text)?;
        HttpUtils::parse_json(&text)
    }

    async fn get_category(&self, id: &str) -> Result<Category> {
        let url = self.config.item_url(id);
        let (status, text) =
            HttpUtils::execute_request(self.client.get(url.clone()), "GET", url.as_str()).await?;

        if status == NOT_FOUND {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        let text = HttpUtils::ensure_success(status, text)?;

        // Some backends answer a missing id with `200 null`
        if text.trim().is_empty() {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        HttpUtils::parse_json::<Option<Category>>(&text)?
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })
    }

    async fn create_category(&self, req: &NewCategory) -> Result<Category> {
        let url = self.config.collection_url();
        self.send_json_body(reqwest::Method::POST, &url, req).await
    }

    async fn update_category(&self, req: &CategoryUpdate) -> Result<Category> {
        let url = self.config.collection_url();
        self.send_json_body(reqwest::Method::PUT, &url, req).await
    }

    async fn delete_category(&self, id: &str) -> Result<()> {
        let url = self.config.item_url(id);
        let (status, text) =
            HttpUtils::execute_request(self.client.delete(url.clone()), "DELETE", url.as_str())
                .await?;

        if status == NOT_FOUND {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        HttpUtils::ensure_success(status, text).map(|_| ())
    }
}
