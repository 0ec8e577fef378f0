//! Transport module - request execution boundary.
//!
//! The dispatch core never opens sockets. A [`Transport`] executes a
//! [`Request`](crate::http::Request) and resolves to a fully buffered
//! [`Response`](crate::http::Response); connection management, pooling,
//! retries and timeouts all live behind this trait in the embedding
//! application.
//!
//! [`MockTransport`] is the in-process double used by the crate's own
//! tests: enqueue canned responses, then assert on the recorded requests.

mod mock;

pub use mock::MockTransport;

use std::io;

use crate::http::{Request, Response};
use crate::route::BoxFuture;

/// Executes HTTP requests on behalf of the client.
///
/// Failures are `io::Error`s: they mean the request never produced a
/// response, and they surface to the caller unrouted.
pub trait Transport: Send + Sync {
    /// Execute the request and resolve with the received response.
    fn send(&self, request: Request) -> BoxFuture<'static, io::Result<Response>>;
}
