//! Routes - the handler side of a binding.
//!
//! A [`Route`] is a closed sum over the three handler shapes:
//!
//! - **Call** - an async callback receiving the raw [`Response`]
//! - **Typed** - deserialize the JSON body into a statically bound type,
//!   then invoke the callback with the value
//! - **Nested** - delegate to a sub-router dispatching over a different
//!   navigator
//!
//! Typed routes convert the body exactly once, only after the route has
//! been selected. An empty body short-circuits to success without invoking
//! the callback, so captures stay unset ("no value") instead of failing
//! conversion.

use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;

use crate::binding::Binding;
use crate::capture::Capture;
use crate::codec::JsonCodec;
use crate::error::{BoxError, Error, Result};
use crate::http::Response;
use crate::navigator::Navigator;
use crate::router::{Dispatch, Router};

/// Boxed future for handler results.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result type for handler callbacks. Domain errors are boxed so the
/// dispatcher can wrap them uniformly while preserving the original for
/// downcasting.
pub type HandlerResult = std::result::Result<(), BoxError>;

type CallFn = Box<dyn Fn(Response) -> BoxFuture<'static, HandlerResult> + Send + Sync>;
type TypedFn = Box<dyn Fn(Response) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// A handler for a dispatched response.
pub struct Route {
    kind: RouteKind,
}

enum RouteKind {
    /// Raw response callback.
    Call(CallFn),
    /// Deserialize-then-call with a statically bound target type.
    Typed(TypedFn),
    /// Delegate to a nested router over a different key.
    Nested(Box<dyn Dispatch>),
}

impl Route {
    /// Route to an async callback receiving the raw response.
    pub fn call<F, Fut>(handler: F) -> Self
    where
        F: Fn(Response) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self {
            kind: RouteKind::Call(Box::new(move |response| Box::pin(handler(response)))),
        }
    }

    /// Route to a callback receiving the body deserialized into `T`.
    ///
    /// An empty body completes the route without invoking the callback.
    pub fn json<T, F, Fut>(handler: F) -> Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self {
            kind: RouteKind::Typed(Box::new(
                move |response: Response| -> BoxFuture<'static, Result<()>> {
                    if response.body.is_empty() {
                        return Box::pin(std::future::ready(Ok(())));
                    }
                    match JsonCodec::decode::<T>(&response.body) {
                        Ok(value) => {
                            let fut = handler(value);
                            Box::pin(async move { fut.await.map_err(Error::Handler) })
                        }
                        Err(err) => Box::pin(std::future::ready(Err(err))),
                    }
                },
            )),
        }
    }

    /// Route the deserialized body into a [`Capture`] cell.
    ///
    /// An empty body leaves the capture unset.
    pub fn capture<T>(capture: &Capture<T>) -> Self
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let slot = capture.clone();
        Self::json(move |value: T| {
            let slot = slot.clone();
            async move { slot.set(value).map_err(|err| Box::new(err) as BoxError) }
        })
    }

    /// Route into a nested router over a different navigator.
    pub fn dispatch<N>(navigator: N, bindings: Vec<Binding<N::Key>>) -> Self
    where
        N: Navigator + 'static,
    {
        Self {
            kind: RouteKind::Nested(Box::new(Router::new(navigator, bindings))),
        }
    }

    /// Run the route against a response.
    pub(crate) async fn run(&self, response: Response) -> Result<()> {
        match &self.kind {
            RouteKind::Call(handler) => handler(response).await.map_err(Error::Handler),
            RouteKind::Typed(handler) => handler(response).await,
            RouteKind::Nested(router) => router.dispatch(response).await,
        }
    }
}

/// The no-op route: accept the response and do nothing.
pub fn pass() -> Route {
    Route::call(|_response| std::future::ready(Ok(())))
}
