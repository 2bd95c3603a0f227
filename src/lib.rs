//! Rust client for the SimilarWeb web analytics REST API.
//!
//! [`client::SimilarWebClient`] is async; [`blocking::SimilarWebClient`] wraps it for
//! synchronous callers. Both return endpoint responses as [`serde_json::Value`].

pub mod blocking;
pub mod client;
pub mod util;

#[cfg(test)]
pub mod test_support;
