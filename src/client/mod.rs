//! Async SimilarWeb REST client.
//!
//! Every operation issues a single `GET` against either a per-domain resource
//! (`/Site/{domain}/{version}/{endpoint}`) or a global one (`/{version}/{endpoint}`),
//! always authenticated with `format=JSON&userkey=...`, and returns the decoded JSON body.

mod api;
mod config;
mod constants;
mod endpoint;
pub mod error;
mod params;
mod transport;

pub use api::SimilarWebClient;
pub use config::ClientConfig;
pub use endpoint::{ApiVersion, Endpoint};
pub use error::{SimilarWebError, SimilarWebErrorCode, SimilarWebResult};
pub use params::{Granularity, GranularityQuery, PageQuery, QueryParams};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
