use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value as JsonValue;
use url::Url;

use crate::client::config::ClientConfig;
use crate::client::constants::{
    ADULT_CATEGORY, ALSO_VISITED, BOUNCE_RATE, CATEGORY, CATEGORY_RANK, LEADING_DESTINATION_SITES,
    ORGANIC_KEYWORD_COMPETITORS, ORGANIC_SEARCH, PAGE_VIEWS, PAID_KEYWORD_COMPETITORS,
    PAID_SEARCH, REFERRALS, SIMILAR_SITES, SOCIAL_REFERRING_SITES, TAGS, TOP_SITES, TRAFFIC,
    VISITS, VISIT_DURATION,
};
use crate::client::endpoint::{BaseUrl, Endpoint};
use crate::client::error::{decode_error, http_error, SimilarWebResult};
use crate::client::params::{GranularityQuery, PageQuery, QueryParams};
use crate::client::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// Async client for the SimilarWeb REST API.
///
/// Each public method maps to one endpoint and performs exactly one GET request. Responses are
/// returned as untyped JSON. The client is cheap to clone and safe to share between tasks.
///
/// # Examples
/// ```ignore
/// use similarweb_rs_sdk::client::{Granularity, GranularityQuery, SimilarWebClient};
///
/// # async fn demo() -> similarweb_rs_sdk::client::SimilarWebResult<()> {
/// let client = SimilarWebClient::new("your-api-key")?;
/// let query = GranularityQuery::new("9-2013", "10-2013", Granularity::Daily);
/// let visits = client.visits("example.com", &query).await?;
/// println!("{visits}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SimilarWebClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    base: BaseUrl,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for SimilarWebClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimilarWebClient")
            .field("host", &self.inner.config.host())
            .field("use_https", &self.inner.config.use_https())
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct CategoryResponse {
    #[serde(rename = "Category")]
    category: Option<String>,
}

impl SimilarWebClient {
    /// Creates an HTTPS client for the public API host.
    pub fn new(api_key: impl Into<String>) -> SimilarWebResult<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> SimilarWebResult<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> SimilarWebResult<Self> {
        let base = BaseUrl::new(config.use_https(), config.host())?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                base,
                transport,
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub async fn visits(
        &self,
        domain: &str,
        query: &GranularityQuery,
    ) -> SimilarWebResult<JsonValue> {
        self.site_granularity(domain, VISITS, query).await
    }

    pub async fn traffic(&self, domain: &str) -> SimilarWebResult<JsonValue> {
        self.site_simple(domain, TRAFFIC).await
    }

    pub async fn page_views(
        &self,
        domain: &str,
        query: &GranularityQuery,
    ) -> SimilarWebResult<JsonValue> {
        self.site_granularity(domain, PAGE_VIEWS, query).await
    }

    pub async fn visit_duration(
        &self,
        domain: &str,
        query: &GranularityQuery,
    ) -> SimilarWebResult<JsonValue> {
        self.site_granularity(domain, VISIT_DURATION, query).await
    }

    pub async fn bounce_rate(
        &self,
        domain: &str,
        query: &GranularityQuery,
    ) -> SimilarWebResult<JsonValue> {
        self.site_granularity(domain, BOUNCE_RATE, query).await
    }

    pub async fn similar_sites(&self, domain: &str) -> SimilarWebResult<JsonValue> {
        self.site_simple(domain, SIMILAR_SITES).await
    }

    pub async fn also_visited(&self, domain: &str) -> SimilarWebResult<JsonValue> {
        self.site_simple(domain, ALSO_VISITED).await
    }

    pub async fn tags(&self, domain: &str) -> SimilarWebResult<JsonValue> {
        self.site_simple(domain, TAGS).await
    }

    pub async fn category(&self, domain: &str) -> SimilarWebResult<JsonValue> {
        self.site_simple(domain, CATEGORY).await
    }

    pub async fn category_rank(&self, domain: &str) -> SimilarWebResult<JsonValue> {
        self.site_simple(domain, CATEGORY_RANK).await
    }

    /// Returns whether the site's category is `Adult`.
    ///
    /// A response without a string `Category` field fails with a decode error rather than
    /// silently reporting `false`.
    pub async fn adult(&self, domain: &str) -> SimilarWebResult<bool> {
        let value = self.category(domain).await?;
        let response: CategoryResponse = serde_json::from_value(value)
            .map_err(|err| decode_error(format!("Invalid category response: {err}")))?;
        let category = response
            .category
            .ok_or_else(|| decode_error("Category response is missing the Category field"))?;
        Ok(category == ADULT_CATEGORY)
    }

    /// Lists the top sites globally, optionally narrowed by category and country.
    pub async fn top_sites(
        &self,
        category: Option<&str>,
        country: Option<&str>,
    ) -> SimilarWebResult<JsonValue> {
        let url = self.inner.base.global_url(TOP_SITES)?;
        let params = QueryParams::top_sites(self.api_key(), category, country);
        self.fetch_json(url, params).await
    }

    pub async fn social_referring_sites(&self, domain: &str) -> SimilarWebResult<JsonValue> {
        self.site_simple(domain, SOCIAL_REFERRING_SITES).await
    }

    pub async fn organic_search(
        &self,
        domain: &str,
        query: &PageQuery,
    ) -> SimilarWebResult<JsonValue> {
        self.site_paged(domain, ORGANIC_SEARCH, query).await
    }

    pub async fn paid_search(
        &self,
        domain: &str,
        query: &PageQuery,
    ) -> SimilarWebResult<JsonValue> {
        self.site_paged(domain, PAID_SEARCH, query).await
    }

    pub async fn leading_destination_sites(&self, domain: &str) -> SimilarWebResult<JsonValue> {
        self.site_simple(domain, LEADING_DESTINATION_SITES).await
    }

    pub async fn referrals(
        &self,
        domain: &str,
        query: &PageQuery,
    ) -> SimilarWebResult<JsonValue> {
        self.site_paged(domain, REFERRALS, query).await
    }

    pub async fn organic_keyword_competitors(
        &self,
        domain: &str,
        query: &PageQuery,
    ) -> SimilarWebResult<JsonValue> {
        self.site_paged(domain, ORGANIC_KEYWORD_COMPETITORS, query).await
    }

    pub async fn paid_keyword_competitors(
        &self,
        domain: &str,
        query: &PageQuery,
    ) -> SimilarWebResult<JsonValue> {
        self.site_paged(domain, PAID_KEYWORD_COMPETITORS, query).await
    }

    fn api_key(&self) -> &str {
        self.inner.config.api_key()
    }

    async fn site_simple(&self, domain: &str, endpoint: Endpoint) -> SimilarWebResult<JsonValue> {
        let url = self.inner.base.site_url(domain, endpoint)?;
        self.fetch_json(url, QueryParams::simple(self.api_key())).await
    }

    async fn site_granularity(
        &self,
        domain: &str,
        endpoint: Endpoint,
        query: &GranularityQuery,
    ) -> SimilarWebResult<JsonValue> {
        let url = self.inner.base.site_url(domain, endpoint)?;
        self.fetch_json(url, QueryParams::granularity(self.api_key(), query))
            .await
    }

    async fn site_paged(
        &self,
        domain: &str,
        endpoint: Endpoint,
        query: &PageQuery,
    ) -> SimilarWebResult<JsonValue> {
        let url = self.inner.base.site_url(domain, endpoint)?;
        self.fetch_json(url, QueryParams::paged(self.api_key(), query))
            .await
    }

    async fn fetch_json(&self, url: Url, params: QueryParams) -> SimilarWebResult<JsonValue> {
        let body = self.http_get(url, params).await?;
        serde_json::from_str(&body)
            .map_err(|err| decode_error(format!("Response is not valid JSON: {err}")))
    }

    async fn http_get(&self, url: Url, params: QueryParams) -> SimilarWebResult<String> {
        let path = url.path().to_string();
        log::debug!("GET {path}");
        let response = self
            .inner
            .transport
            .get(HttpRequest::new(url, params))
            .await?;
        if response.status != 200 {
            log::warn!("SimilarWeb request {path} failed with HTTP {}", response.status);
            return Err(http_error(response.status, response.body));
        }
        Ok(response.body)
    }
}
