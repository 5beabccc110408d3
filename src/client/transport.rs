//! HTTP transport
//!
//! The seam between the client's orchestration (gating, fallback, retry,
//! caching) and the wire. Production uses [`HttpTransport`] over reqwest;
//! tests substitute [`MockSkipTransport`].

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;

use crate::{
    client::{config::ClientConfig, errors::FetchError},
    skips::Skip,
};

/// Raw access to the vendor skip API.
#[automock]
#[async_trait]
pub trait SkipTransport: Send + Sync {
    /// Fetches the skips serviceable for a postcode, optionally refined by
    /// an area. An empty `area` is omitted from the request entirely.
    async fn get_by_location(&self, postcode: &str, area: &str) -> Result<Vec<Skip>, FetchError>;

    /// Fetches a single skip by id.
    async fn get_by_id(&self, id: u64) -> Result<Skip, FetchError>;
}

/// Reqwest-backed transport for the vendor API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http: Client,
}

impl HttpTransport {
    /// Builds a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            http,
        })
    }

    /// Reads a response body and shape-validates it, keeping parse
    /// failures distinct from transport failures.
    async fn read_body<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|error| FetchError::from_transport(&error))?;

        serde_json::from_str(&body).map_err(FetchError::MalformedResponse)
    }
}

#[async_trait]
impl SkipTransport for HttpTransport {
    async fn get_by_location(&self, postcode: &str, area: &str) -> Result<Vec<Skip>, FetchError> {
        let url = format!("{}/skips/by-location", self.base_url);

        let mut request = self.http.get(url).query(&[("postcode", postcode)]);
        if !area.is_empty() {
            request = request.query(&[("area", area)]);
        }

        let response = request
            .send()
            .await
            .map_err(|error| FetchError::from_transport(&error))?;

        Self::read_body(response).await
    }

    async fn get_by_id(&self, id: u64) -> Result<Skip, FetchError> {
        let url = format!("{}/skips/{id}", self.base_url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|error| FetchError::from_transport(&error))?;

        Self::read_body(response).await
    }
}
