//! Client builder and request surface.
//!
//! [`HttpBuilder`] provides a fluent API for configuring the client; [`Http`]
//! creates one [`RequestBuilder`] per request. The terminal operations are:
//!
//! 1. `dispatch(navigator, bindings)` - execute the request and route the
//!    response through a [`Router`]
//! 2. `call(route)` - execute the request and run a single route
//!    unconditionally
//!
//! Both return a future that completes once the response has been fully
//! processed; every failure (transport, routing, conversion, handler)
//! surfaces through that future.
//!
//! # Example
//!
//! ```ignore
//! use routewire::{any, on, status, Capture, Http, MockTransport};
//!
//! let http = Http::builder()
//!     .base_url("http://localhost:8080")
//!     .transport(transport)
//!     .build()?;
//!
//! let capture = Capture::empty();
//! http.get("/products/100")
//!     .dispatch(status(), vec![
//!         on(200).capture(&capture),
//!         any().pass(),
//!     ])
//!     .await?;
//! ```

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;

use crate::binding::Binding;
use crate::codec::JsonCodec;
use crate::error::{Error, Result};
use crate::http::{Method, Request, Response, APPLICATION_JSON};
use crate::navigator::Navigator;
use crate::route::Route;
use crate::router::Router;
use crate::transport::Transport;

/// HTTP client front-end over a configured [`Transport`].
pub struct Http {
    base_url: String,
    default_headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Http {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Http")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl Http {
    /// Create a new client builder.
    pub fn builder() -> HttpBuilder {
        HttpBuilder::new()
    }

    /// Start a GET request.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::Get, path)
    }

    /// Start a POST request.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::Post, path)
    }

    /// Start a PUT request.
    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::Put, path)
    }

    /// Start a DELETE request.
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::Delete, path)
    }

    /// Start a PATCH request.
    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::Patch, path)
    }

    /// Start a HEAD request.
    pub fn head(&self, path: &str) -> RequestBuilder {
        self.request(Method::Head, path)
    }

    /// Start a request with an explicit method.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        RequestBuilder {
            transport: Arc::clone(&self.transport),
            method,
            url: join_url(&self.base_url, path),
            headers: self.default_headers.clone(),
            query: Vec::new(),
            body: None,
        }
    }
}

/// Builder for configuring and creating an [`Http`] client.
pub struct HttpBuilder {
    base_url: String,
    default_headers: Vec<(String, String)>,
    transport: Option<Arc<dyn Transport>>,
}

impl HttpBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            default_headers: Vec::new(),
            transport: None,
        }
    }

    /// Set the base URL prepended to relative request paths.
    ///
    /// A trailing slash is stripped so path joining stays predictable.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Add a header sent with every request, ahead of per-request headers.
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Set the transport that executes requests. Required.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no transport was supplied.
    pub fn build(self) -> Result<Http> {
        let transport = self
            .transport
            .ok_or_else(|| Error::Config("transport is required".to_string()))?;
        Ok(Http {
            base_url: self.base_url,
            default_headers: self.default_headers,
            transport,
        })
    }
}

impl Default for HttpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A single request under construction.
pub struct RequestBuilder {
    transport: Arc<dyn Transport>,
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Append a header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Set the `Content-Type` header.
    pub fn content_type(self, value: &str) -> Self {
        self.header("content-type", value)
    }

    /// Append a query parameter. Parameters keep declaration order; values
    /// are taken verbatim.
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Set a JSON request body, encoded eagerly.
    ///
    /// Sets `Content-Type: application/json` unless a content type is
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the value cannot be serialized.
    pub fn body<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let encoded = JsonCodec::encode(body)?;
        if !self
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        {
            self.headers
                .push(("content-type".to_string(), APPLICATION_JSON.to_string()));
        }
        self.body = Some(encoded);
        Ok(self)
    }

    /// Execute the request and route the response.
    ///
    /// The returned future completes once the selected handler (and any
    /// nested dispatch below it) has finished.
    pub async fn dispatch<N>(self, navigator: N, bindings: Vec<Binding<N::Key>>) -> Result<()>
    where
        N: Navigator,
    {
        let router = Router::new(navigator, bindings);
        let response = self.send().await?;
        router.dispatch(response).await
    }

    /// Execute the request and run a single route on the response,
    /// whatever its status.
    pub async fn call(self, route: Route) -> Result<()> {
        let response = self.send().await?;
        route.run(response).await
    }

    async fn send(self) -> Result<Response> {
        let RequestBuilder {
            transport,
            method,
            mut url,
            headers,
            query,
            body,
        } = self;

        if !query.is_empty() {
            let joined: Vec<String> = query
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            url.push('?');
            url.push_str(&joined.join("&"));
        }

        let request = Request {
            method,
            url,
            headers,
            body,
        };
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        Ok(transport.send(request).await?)
    }
}

/// Join a base URL and a request path. Absolute `http(s)://` paths pass
/// through untouched.
fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}
