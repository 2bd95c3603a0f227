use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::{block_on_methods, RT};
use crate::client::{
    ClientConfig, GranularityQuery, HttpTransport, PageQuery, SimilarWebClient as AsyncClient,
    SimilarWebResult,
};

/// Blocking counterpart of [`crate::client::SimilarWebClient`] with the same operations.
#[derive(Clone, Debug)]
pub struct SimilarWebClient {
    inner: AsyncClient,
}

impl SimilarWebClient {
    pub fn new(api_key: impl Into<String>) -> SimilarWebResult<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> SimilarWebResult<Self> {
        Ok(Self {
            inner: AsyncClient::with_config(config)?,
        })
    }

    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> SimilarWebResult<Self> {
        Ok(Self {
            inner: AsyncClient::with_transport(config, transport)?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// Borrow the underlying async client.
    pub fn as_async(&self) -> &AsyncClient {
        &self.inner
    }

    block_on_methods! {
        fn visits(domain: &str, query: &GranularityQuery) -> SimilarWebResult<JsonValue>;
        fn traffic(domain: &str) -> SimilarWebResult<JsonValue>;
        fn page_views(domain: &str, query: &GranularityQuery) -> SimilarWebResult<JsonValue>;
        fn visit_duration(domain: &str, query: &GranularityQuery) -> SimilarWebResult<JsonValue>;
        fn bounce_rate(domain: &str, query: &GranularityQuery) -> SimilarWebResult<JsonValue>;
        fn similar_sites(domain: &str) -> SimilarWebResult<JsonValue>;
        fn also_visited(domain: &str) -> SimilarWebResult<JsonValue>;
        fn tags(domain: &str) -> SimilarWebResult<JsonValue>;
        fn category(domain: &str) -> SimilarWebResult<JsonValue>;
        fn category_rank(domain: &str) -> SimilarWebResult<JsonValue>;
        fn adult(domain: &str) -> SimilarWebResult<bool>;
        fn top_sites(category: Option<&str>, country: Option<&str>) -> SimilarWebResult<JsonValue>;
        fn social_referring_sites(domain: &str) -> SimilarWebResult<JsonValue>;
        fn organic_search(domain: &str, query: &PageQuery) -> SimilarWebResult<JsonValue>;
        fn paid_search(domain: &str, query: &PageQuery) -> SimilarWebResult<JsonValue>;
        fn leading_destination_sites(domain: &str) -> SimilarWebResult<JsonValue>;
        fn referrals(domain: &str, query: &PageQuery) -> SimilarWebResult<JsonValue>;
        fn organic_keyword_competitors(
            domain: &str,
            query: &PageQuery
        ) -> SimilarWebResult<JsonValue>;
        fn paid_keyword_competitors(domain: &str, query: &PageQuery) -> SimilarWebResult<JsonValue>;
    }
}
