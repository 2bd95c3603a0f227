use std::fmt::{Display, Formatter};

use url::Url;

use crate::client::error::{internal_error, invalid_argument, SimilarWebResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl Display for ApiVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A versioned API resource such as `v1/visits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    version: ApiVersion,
    path: &'static str,
}

impl Endpoint {
    pub const fn new(version: ApiVersion, path: &'static str) -> Self {
        Self { version, path }
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.version, self.path)
    }
}

/// Scheme-qualified root used to derive both URL families:
///
/// * per-domain: `{scheme}://{host}/Site/{domain}/{version}/{endpoint}`
/// * global: `{scheme}://{host}/{version}/{endpoint}`
#[derive(Clone, Debug)]
pub(crate) struct BaseUrl {
    root: Url,
}

impl BaseUrl {
    pub(crate) fn new(use_https: bool, host: &str) -> SimilarWebResult<Self> {
        let scheme = if use_https { "https" } else { "http" };
        let raw = format!("{scheme}://{host}/");
        let root = Url::parse(&raw)
            .map_err(|err| invalid_argument(format!("Invalid API host '{host}': {err}")))?;
        if root.cannot_be_a_base() || root.host_str().is_none() {
            return Err(invalid_argument(format!("Invalid API host '{host}'")));
        }
        Ok(Self { root })
    }

    /// `domain` must name a single path segment; `""`, `"."` and `".."` would collapse the
    /// `/Site/{domain}` prefix and are rejected.
    pub(crate) fn site_url(&self, domain: &str, endpoint: Endpoint) -> SimilarWebResult<Url> {
        if matches!(domain.trim(), "" | "." | "..") {
            return Err(invalid_argument(format!("Invalid domain '{domain}'")));
        }
        self.build(&["Site", domain, endpoint.version.as_str(), endpoint.path])
    }

    pub(crate) fn global_url(&self, endpoint: Endpoint) -> SimilarWebResult<Url> {
        self.build(&[endpoint.version.as_str(), endpoint.path])
    }

    fn build(&self, segments: &[&str]) -> SimilarWebResult<Url> {
        let mut url = self.root.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| internal_error("API base URL cannot carry a path"))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}
