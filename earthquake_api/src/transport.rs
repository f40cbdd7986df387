//! Blocking HTTP transport for the event service.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

use crate::{config::ClientConfig, Error};

/// Performs one GET against the service and returns the response body.
///
/// `path` is relative to the service endpoint (`"/count"`), `query` is an
/// already encoded query string. Implementations must map every response
/// other than 200 OK to an error.
pub trait Transport {
    fn get(&self, path: &str, query: Option<&str>) -> Result<String, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, path: &str, query: Option<&str>) -> Result<String, Error> {
        (**self).get(path, query)
    }
}

/// [`Transport`] backed by a pooled `reqwest` blocking client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {:?}: {}", config.base_url, e);
            Error::InvalidUrl(e)
        })?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Request(e)
            })?;
        Ok(Self { client, base_url })
    }

    /// Appends `path` to the base URL's path prefix and sets `query`.
    fn url(&self, path: &str, query: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(query);
        url
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, query: Option<&str>) -> Result<String, Error> {
        let url = self.url(path, query);
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url.clone()).send().map_err(|e| {
            tracing::error!("Failed to get {}: {}", url, e);
            Error::Request(e)
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let is_html = resp
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|ct| ct.contains("html"));
            let body = if is_html {
                String::new()
            } else {
                truncate_body(resp.text().unwrap_or_default().as_str())
            };
            tracing::error!("Request failed with status {}: {}", status, body);
            return Err(Error::HttpStatus {
                code: status.as_u16(),
                status: status.to_string(),
                body,
            });
        }

        resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Request(e)
        })
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...[truncated]", &body[..end]),
        None => body.to_string(),
    }
}
