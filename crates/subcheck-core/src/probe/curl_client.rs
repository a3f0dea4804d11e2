//! libcurl-backed [`HttpClient`].

use std::time::Duration;

use super::{HttpClient, HttpResponse, ProbeError};
use crate::config::HttpConfig;

/// Blocking client built on `curl::easy`. One handle per request.
#[derive(Debug, Clone)]
pub struct CurlClient {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl CurlClient {
    pub fn new(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy, ProbeError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(|e| ProbeError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let setup = (|| -> Result<(), curl::Error> {
            easy.follow_location(true)?;
            easy.max_redirections(10)?;
            easy.connect_timeout(self.connect_timeout)?;
            easy.timeout(self.timeout)?;
            easy.useragent(&self.user_agent)?;
            let mut headers = curl::easy::List::new();
            headers.append("Accept: application/vnd.github+json, */*")?;
            easy.http_headers(headers)?;
            Ok(())
        })();
        setup.map_err(|e| transport(url, &e))?;
        Ok(easy)
    }
}

fn transport(url: &str, e: &curl::Error) -> ProbeError {
    ProbeError::Transport {
        url: url.to_string(),
        reason: e.to_string(),
    }
}

impl HttpClient for CurlClient {
    fn head(&self, url: &str) -> Result<u32, ProbeError> {
        let mut easy = self.easy(url)?;
        easy.nobody(true).map_err(|e| transport(url, &e))?; // HEAD request
        easy.perform().map_err(|e| transport(url, &e))?;
        let status = easy.response_code().map_err(|e| transport(url, &e))?;
        tracing::debug!(url, status, "HEAD");
        Ok(status)
    }

    fn get(&self, url: &str) -> Result<HttpResponse, ProbeError> {
        let mut easy = self.easy(url)?;
        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| transport(url, &e))?;
            transfer.perform().map_err(|e| transport(url, &e))?;
        }
        let status = easy.response_code().map_err(|e| transport(url, &e))?;
        tracing::debug!(url, status, bytes = body.len(), "GET");
        Ok(HttpResponse { status, body })
    }
}
