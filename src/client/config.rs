use std::fmt;
use std::time::Duration;

use crate::client::constants::{API_HOST_ENV, API_KEY_ENV, DEFAULT_API_HOST, USE_HTTPS_ENV};
use crate::client::error::{invalid_argument, SimilarWebResult};

/// Settings fixed for the lifetime of a [`SimilarWebClient`](crate::client::SimilarWebClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    use_https: bool,
    host: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// The key is sent verbatim; a wrong key only surfaces as an HTTP error on the first call.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            use_https: true,
            host: DEFAULT_API_HOST.to_string(),
            timeout: None,
        }
    }

    /// Reads `SIMILARWEB_API_KEY`, plus the optional `SIMILARWEB_API_HOST` and
    /// `SIMILARWEB_USE_HTTPS` overrides.
    pub fn from_env() -> SimilarWebResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| invalid_argument(format!("{API_KEY_ENV} is not set")))?;
        let mut config = Self::new(api_key);
        if let Ok(host) = std::env::var(API_HOST_ENV) {
            config = config.with_host(host);
        }
        if let Ok(raw) = std::env::var(USE_HTTPS_ENV) {
            config = config.with_https(parse_flag(&raw)?);
        }
        Ok(config)
    }

    pub fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Overrides `api.similarweb.com`, e.g. to target a local emulator (`127.0.0.1:8080`).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn use_https(&self) -> bool {
        self.use_https
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("use_https", &self.use_https)
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_flag(raw: &str) -> SimilarWebResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(invalid_argument(format!(
            "{USE_HTTPS_ENV} must be a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::error::SimilarWebErrorCode;
    use std::sync::Mutex;

    // Environment variables are process-wide; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(API_HOST_ENV);
        std::env::remove_var(USE_HTTPS_ENV);
    }

    #[test]
    fn defaults_to_https_on_public_host() {
        let config = ClientConfig::new("asd");
        assert_eq!(config.api_key(), "asd");
        assert!(config.use_https());
        assert_eq!(config.host(), "api.similarweb.com");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn empty_key_is_accepted() {
        assert_eq!(ClientConfig::new("").api_key(), "");
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::new("asd")
            .with_https(false)
            .with_host("localhost:9000")
            .with_timeout(Duration::from_secs(5));
        assert!(!config.use_https());
        assert_eq!(config.host(), "localhost:9000");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(!parse_flag(" 0 ").unwrap());
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = ClientConfig::new("SECRET-KEY").with_host("localhost:9000");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("SECRET-KEY"), "{rendered}");
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("localhost:9000"));
    }

    #[test]
    fn from_env_reads_key_host_and_scheme() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_env();

        let err = ClientConfig::from_env().unwrap_err();
        assert_eq!(err.code, SimilarWebErrorCode::InvalidArgument);

        std::env::set_var(API_KEY_ENV, "env-key");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_key(), "env-key");
        assert_eq!(config.host(), DEFAULT_API_HOST);
        assert!(config.use_https());

        std::env::set_var(API_HOST_ENV, "127.0.0.1:8080");
        std::env::set_var(USE_HTTPS_ENV, "0");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.host(), "127.0.0.1:8080");
        assert!(!config.use_https());

        std::env::set_var(USE_HTTPS_ENV, "sometimes");
        let err = ClientConfig::from_env().unwrap_err();
        assert_eq!(err.code, SimilarWebErrorCode::InvalidArgument);

        clear_env();
    }
}
