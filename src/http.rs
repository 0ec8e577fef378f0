//! Plain-data HTTP message types.
//!
//! Requests and responses are described as owned data with no connection
//! state attached. The client builds [`Request`] values and a
//! [`Transport`](crate::transport::Transport) implementation executes them,
//! returning a fully buffered [`Response`]. Payloads use `bytes::Bytes` so
//! bodies can be shared across tasks without copying.

use std::fmt;

use bytes::Bytes;

/// Canonical `Content-Type` value for JSON bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl Method {
    /// Get the canonical upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by the client; executed by the configured transport.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method.
    pub method: Method,
    /// Fully resolved URL, including any query string.
    pub url: String,
    /// Ordered header list (default headers first, then per-request ones).
    pub headers: Vec<(String, String)>,
    /// Optional request body.
    pub body: Option<Bytes>,
}

impl Request {
    /// Get the first header with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A fully buffered HTTP response.
///
/// Constructed by the transport after executing a [`Request`], then handed
/// to the router for dispatch.
#[derive(Debug, Clone)]
pub struct Response {
    /// Numeric status code (e.g. `200`, `404`).
    pub status: u16,
    /// Ordered response header list.
    pub headers: Vec<(String, String)>,
    /// Raw body bytes (zero-copy via `bytes::Bytes`).
    pub body: Bytes,
}

impl Response {
    /// Create a response with the given status and an empty body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Create a response carrying a JSON body.
    ///
    /// Sets the `Content-Type` header to `application/json`.
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![("content-type".to_string(), APPLICATION_JSON.to_string())],
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    /// Append a header, consuming and returning the response.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Classify the status code into its [`Series`].
    #[inline]
    pub fn series(&self) -> Series {
        Series::of(self.status)
    }

    /// Get the first header with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Get the media type of the body, normalized for comparison.
    ///
    /// Parameters (`; charset=...`) are stripped and the result is
    /// lowercased. Returns an empty string when the header is absent, so
    /// content-type navigation stays total.
    pub fn content_type(&self) -> String {
        self.header("content-type")
            .map(|value| {
                value
                    .split(';')
                    .next()
                    .unwrap_or(value)
                    .trim()
                    .to_ascii_lowercase()
            })
            .unwrap_or_default()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(header, _)| header.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Classification of a status code into a coarse category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    /// 1xx.
    Informational,
    /// 2xx.
    Successful,
    /// 3xx.
    Redirection,
    /// 4xx.
    ClientError,
    /// 5xx.
    ServerError,
    /// Anything outside 100..=599.
    Unknown,
}

impl Series {
    /// Classify a status code. Total: out-of-range codes map to `Unknown`.
    pub fn of(status: u16) -> Self {
        match status {
            100..=199 => Series::Informational,
            200..=299 => Series::Successful,
            300..=399 => Series::Redirection,
            400..=499 => Series::ClientError,
            500..=599 => Series::ServerError,
            _ => Series::Unknown,
        }
    }
}
