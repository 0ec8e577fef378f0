//! # routewire
//!
//! Response-driven dispatch for HTTP clients.
//!
//! routewire routes a received HTTP response to one of several typed
//! handlers, keyed by a navigable attribute of the response: exact status
//! code, status series, content type, or a custom key. Handlers can be raw
//! callbacks, typed deserialize-and-call routes, or nested routers, and a
//! [`Capture`] cell carries a handler's value back to the awaiting caller.
//!
//! ## Architecture
//!
//! - **Navigator** (stateless): extracts the dispatch key from a response
//! - **Binding**: pairs one key (or the wildcard) with a route
//! - **Router**: selects the first matching binding and runs its route;
//!   exact matches beat wildcards
//! - **Capture**: write-once cell bridging a handler result to the caller
//! - **Transport**: executes requests; supplied by the embedding
//!   application
//!
//! ## Example
//!
//! ```ignore
//! use routewire::{any, on, series, status, Capture, Http, Series};
//!
//! let http = Http::builder()
//!     .base_url(base_url)
//!     .transport(transport)
//!     .build()?;
//!
//! let capture = Capture::empty();
//! http.get("/products/100")
//!     .dispatch(series(), vec![
//!         on(Series::Successful).dispatch(status(), vec![
//!             on(200).capture(&capture),
//!             any().pass(),
//!         ]),
//!         on(Series::ClientError).call(|response| async move {
//!             Err(format!("client error: {}", response.status).into())
//!         }),
//!         any().pass(),
//!     ])
//!     .await?;
//!
//! let product: Option<Product> = capture.get();
//! ```

pub mod binding;
pub mod capture;
pub mod codec;
pub mod error;
pub mod http;
pub mod navigator;
pub mod route;
pub mod router;
pub mod transport;

mod client;

pub use binding::{any, on, Binding, BindingBuilder};
pub use capture::{AlreadyCaptured, Capture};
pub use client::{Http, HttpBuilder, RequestBuilder};
pub use error::{BoxError, Error, Result};
pub use http::{Method, Request, Response, Series, APPLICATION_JSON};
pub use navigator::{content_type, key_fn, series, status, Navigator};
pub use route::{pass, HandlerResult, Route};
pub use router::{Dispatch, Router};
pub use transport::{MockTransport, Transport};
