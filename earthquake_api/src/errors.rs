//! Error types for the API client.

/// Errors that can occur when talking to the event service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request could not be completed (connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with something other than 200 OK.
    ///
    /// `body` is empty when the service returned an HTML error page.
    #[error("{status} ({code}): {body:?}")]
    HttpStatus {
        code: u16,
        status: String,
        body: String,
    },
    /// The base URL or a method path did not form a valid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode {format} response: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },
    /// Paging resolved to a page size of zero while records remained.
    #[error("page size resolved to zero; set a limit on the query")]
    InvalidPageSize,
}

impl Error {
    pub(crate) fn decode(format: &'static str, err: impl std::fmt::Display) -> Self {
        Error::Decode {
            format,
            message: err.to_string(),
        }
    }
}
