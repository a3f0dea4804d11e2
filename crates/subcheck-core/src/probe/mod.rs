//! HTTP probing.
//!
//! Checks talk to the network through [`HttpClient`] so they can run against
//! an in-memory fake in tests. The production implementation is
//! [`CurlClient`] (libcurl via the `curl` crate).

mod curl_client;

pub use curl_client::CurlClient;

use thiserror::Error;

/// Status and body of a completed request.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Failure to get any HTTP response at all. Status codes are not errors.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

/// Minimal blocking HTTP client used by the checks.
pub trait HttpClient {
    /// HEAD request, following redirects. Returns the final status.
    fn head(&self, url: &str) -> Result<u32, ProbeError>;

    /// GET request, following redirects. Returns the final status and body.
    fn get(&self, url: &str) -> Result<HttpResponse, ProbeError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn head(&self, url: &str) -> Result<u32, ProbeError> {
        (**self).head(url)
    }

    fn get(&self, url: &str) -> Result<HttpResponse, ProbeError> {
        (**self).get(url)
    }
}

/// A link counts as reachable when the server answered with a non-error status.
pub fn is_reachable(status: u32) -> bool {
    (200..400).contains(&status)
}

/// A probed file counts as present only on a success status.
pub fn is_present(status: u32) -> bool {
    (200..300).contains(&status)
}
