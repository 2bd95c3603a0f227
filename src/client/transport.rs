use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::client::error::{internal_error, network_error, SimilarWebError, SimilarWebResult};
use crate::client::params::QueryParams;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub query: QueryParams,
}

impl HttpRequest {
    pub fn new(url: Url, query: QueryParams) -> Self {
        Self { url, query }
    }
}

/// Status and raw body of a completed exchange. Non-2xx statuses are not errors at this level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs GET requests on behalf of the client.
///
/// Implementations only fail when no response could be obtained at all; status handling
/// stays with the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> SimilarWebResult<HttpResponse>;
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> SimilarWebResult<Self> {
        let mut builder = Client::builder()
            .user_agent(format!("similarweb-rs-sdk/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| internal_error(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self { http })
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> SimilarWebResult<HttpResponse> {
        let HttpRequest { url, query } = request;
        let response = self
            .http
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| network_error(format!("failed to read response body: {err}")))?;
        Ok(HttpResponse { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SimilarWebError {
    if err.is_timeout() {
        return network_error(format!("request timed out: {err}"));
    }
    if err.is_connect() {
        return network_error(format!("failed to connect to the API: {err}"));
    }
    if err.is_builder() {
        return internal_error(format!("malformed request: {err}"));
    }
    network_error(format!("request failed: {err}"))
}
