//! In-process transport double for tests.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use crate::http::{Request, Response};
use crate::route::BoxFuture;

use super::Transport;

/// Scripted transport: responses are served from a queue in FIFO order and
/// every executed request is recorded for later assertions.
///
/// Cloning shares the queue and the recording, so a test can keep a handle
/// while the client owns another.
///
/// # Example
///
/// ```ignore
/// let transport = MockTransport::new();
/// transport.enqueue(Response::json(200, r#"{"id":"1","name":"x"}"#));
///
/// let http = Http::builder()
///     .base_url("http://mock")
///     .transport(transport.clone())
///     .build()?;
/// // ... drive the client ...
/// let recorded = transport.take_request().unwrap();
/// assert_eq!(recorded.url, "http://mock/products/1");
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    queue: VecDeque<Response>,
    requests: VecDeque<Request>,
}

impl MockTransport {
    /// Create a transport with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a canned response.
    pub fn enqueue(&self, response: Response) {
        self.lock().queue.push_back(response);
    }

    /// Number of requests executed so far.
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Pop the oldest recorded request, if any.
    pub fn take_request(&self) -> Option<Request> {
        self.lock().requests.pop_front()
    }

    /// Snapshot of all recorded requests, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.lock().requests.iter().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for MockTransport {
    fn send(&self, request: Request) -> BoxFuture<'static, io::Result<Response>> {
        let mut state = self.lock();
        state.requests.push_back(request);
        let result = state.queue.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::ConnectionRefused, "no mock response enqueued")
        });
        Box::pin(std::future::ready(result))
    }
}
