//! Location-based skip fetcher
//!
//! [`SkipClient`] resolves a [`SearchParams`] against the vendor API:
//! strict validation gate, cache lookup, postcode-variation fallback when
//! no explicit area was supplied, and bounded retry with exponential
//! backoff for transient failures. Results are cached per normalized
//! query key, which also makes responses for a superseded query
//! discardable by the caller.

pub mod cache;
pub mod config;
pub mod errors;
pub mod transport;

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub use cache::{InMemoryCache, MockSkipCache, SkipCache};
pub use config::{ClientConfig, RetryPolicy};
pub use errors::FetchError;
pub use transport::{HttpTransport, MockSkipTransport, SkipTransport};

use crate::{
    search::{SearchParams, area_variations},
    skips::Skip,
};

/// How long a cached result counts as fresh.
pub const FRESH_FOR: Duration = Duration::from_secs(5 * 60);

/// How long an unused cache entry survives before eviction.
pub const EVICT_AFTER: Duration = Duration::from_secs(10 * 60);

/// Client for fetching skips by location.
pub struct SkipClient {
    transport: Arc<dyn SkipTransport>,
    cache: Arc<dyn SkipCache>,
    retry: RetryPolicy,
}

impl fmt::Debug for SkipClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipClient")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl SkipClient {
    /// Builds a client with the reqwest transport and the in-memory cache.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        Ok(Self::with_parts(
            Arc::new(HttpTransport::new(config)?),
            Arc::new(InMemoryCache::new(EVICT_AFTER)),
            config.retry,
        ))
    }

    /// Builds a client from explicit transport and cache implementations.
    #[must_use]
    pub fn with_parts(
        transport: Arc<dyn SkipTransport>,
        cache: Arc<dyn SkipCache>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            cache,
            retry,
        }
    }

    /// Fetches the skips available for the given search.
    ///
    /// An explicit area issues exactly one request; a bare postcode walks
    /// the derived area variations in order, stopping at the first
    /// success. Repeated identical searches within the freshness window
    /// are served from the cache without a network call.
    ///
    /// # Errors
    ///
    /// [`FetchError::InvalidSearch`] when the strict postcode gate fails;
    /// otherwise the error class of the last failed attempt.
    #[tracing::instrument(skip(self, params), fields(query = %params.query_key()))]
    pub async fn fetch_skips(&self, params: &SearchParams) -> Result<Vec<Skip>, FetchError> {
        if !params.is_searchable() {
            return Err(FetchError::InvalidSearch);
        }

        let key = params.query_key();

        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(count = hit.len(), "serving cached result");
            return Ok(hit);
        }

        let skips = if key.area.is_empty() {
            self.fetch_with_fallback(&key.postcode).await?
        } else {
            self.attempt(&key.postcode, &key.area).await?
        };

        tracing::debug!(count = skips.len(), "fetched skips");
        self.cache.set(key, skips.clone(), FRESH_FOR);

        Ok(skips)
    }

    /// Fetches a single skip by id, with the same retry policy as
    /// location searches.
    ///
    /// # Errors
    ///
    /// [`FetchError::InvalidSkipId`] for a zero id; otherwise the error
    /// class of the last failed attempt.
    pub async fn fetch_skip(&self, id: u64) -> Result<Skip, FetchError> {
        if id == 0 {
            return Err(FetchError::InvalidSkipId);
        }

        with_retry(self.retry, || self.transport.get_by_id(id)).await
    }

    async fn fetch_with_fallback(&self, postcode: &str) -> Result<Vec<Skip>, FetchError> {
        let variations = area_variations(postcode);

        let mut last_error = FetchError::NotFound;
        for variation in &variations {
            match self.attempt(variation, "").await {
                Ok(skips) => return Ok(skips),
                Err(error) => {
                    tracing::debug!(%variation, %error, "variation attempt failed");
                    last_error = error;
                }
            }
        }

        Err(last_error)
    }

    async fn attempt(&self, postcode: &str, area: &str) -> Result<Vec<Skip>, FetchError> {
        with_retry(self.retry, || self.transport.get_by_location(postcode, area)).await
    }
}

/// Runs `op`, retrying transient failures up to the policy's bound with
/// exponential backoff. Non-transient failures surface immediately.
async fn with_retry<T, F, Fut>(retry: RetryPolicy, mut op: F) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut attempt = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_transient() && attempt < retry.max_retries => {
                let delay = retry.delay_for(attempt);
                tracing::warn!(attempt, ?delay, %error, "transient failure, backing off");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
