use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimilarWebErrorCode {
    InvalidArgument,
    Internal,
    Network,
    Http,
    Decode,
}

impl SimilarWebErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarWebErrorCode::InvalidArgument => "similarweb/invalid-argument",
            SimilarWebErrorCode::Internal => "similarweb/internal",
            SimilarWebErrorCode::Network => "similarweb/network",
            SimilarWebErrorCode::Http => "similarweb/http",
            SimilarWebErrorCode::Decode => "similarweb/decode",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimilarWebError {
    pub code: SimilarWebErrorCode,
    message: String,
    status: Option<u16>,
    body: Option<String>,
}

impl SimilarWebError {
    pub fn new(code: SimilarWebErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            body: None,
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code returned by the API, present for [`SimilarWebErrorCode::Http`].
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Raw response body returned alongside a non-200 status.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl Display for SimilarWebError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for SimilarWebError {}

pub type SimilarWebResult<T> = Result<T, SimilarWebError>;

pub fn invalid_argument(message: impl Into<String>) -> SimilarWebError {
    SimilarWebError::new(SimilarWebErrorCode::InvalidArgument, message)
}

pub fn internal_error(message: impl Into<String>) -> SimilarWebError {
    SimilarWebError::new(SimilarWebErrorCode::Internal, message)
}

pub fn network_error(message: impl Into<String>) -> SimilarWebError {
    SimilarWebError::new(SimilarWebErrorCode::Network, message)
}

pub fn decode_error(message: impl Into<String>) -> SimilarWebError {
    SimilarWebError::new(SimilarWebErrorCode::Decode, message)
}

pub fn http_error(status: u16, body: impl Into<String>) -> SimilarWebError {
    let body = body.into();
    SimilarWebError {
        code: SimilarWebErrorCode::Http,
        message: format!("HTTP {status} {body}"),
        status: Some(status),
        body: Some(body),
    }
}
