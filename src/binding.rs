//! Bindings - associating a dispatch key with a route.
//!
//! A [`Binding`] pairs an optional key of the active navigator's key type
//! with a [`Route`]. `None` is the wildcard: it matches any key, but only
//! after every exact binding has been considered.
//!
//! Bindings are built with the fluent [`on`] / [`any`] constructors:
//!
//! ```ignore
//! use routewire::{any, on, status, Capture};
//!
//! let capture = Capture::empty();
//! let bindings = vec![
//!     on(200).capture(&capture),
//!     on(404).call(|response| async move { Ok(()) }),
//!     any().pass(),
//! ];
//! ```

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::capture::Capture;
use crate::navigator::Navigator;
use crate::route::{pass, HandlerResult, Route};

/// Association of a dispatch key (or wildcard) with a route.
pub struct Binding<K> {
    key: Option<K>,
    route: Route,
}

impl<K> Binding<K> {
    pub(crate) fn new(key: Option<K>, route: Route) -> Self {
        Self { key, route }
    }

    /// The bound key, or `None` for a wildcard.
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Whether this binding matches any key.
    pub fn is_wildcard(&self) -> bool {
        self.key.is_none()
    }

    pub(crate) fn route(&self) -> &Route {
        &self.route
    }
}

/// Start a binding for one exact key.
pub fn on<K>(key: K) -> BindingBuilder<K> {
    BindingBuilder { key: Some(key) }
}

/// Start a wildcard binding matching any key.
pub fn any<K>() -> BindingBuilder<K> {
    BindingBuilder { key: None }
}

/// Builder pairing a key with its route.
pub struct BindingBuilder<K> {
    key: Option<K>,
}

impl<K> BindingBuilder<K> {
    /// Bind an async callback receiving the raw response.
    pub fn call<F, Fut>(self, handler: F) -> Binding<K>
    where
        F: Fn(crate::http::Response) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Binding::new(self.key, Route::call(handler))
    }

    /// Bind a callback receiving the body deserialized into `T`.
    pub fn json<T, F, Fut>(self, handler: F) -> Binding<K>
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Binding::new(self.key, Route::json(handler))
    }

    /// Bind a typed capture cell.
    pub fn capture<T>(self, capture: &Capture<T>) -> Binding<K>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        Binding::new(self.key, Route::capture(capture))
    }

    /// Bind a nested dispatch over a different navigator.
    pub fn dispatch<N>(self, navigator: N, bindings: Vec<Binding<N::Key>>) -> Binding<K>
    where
        N: Navigator + 'static,
    {
        Binding::new(self.key, Route::dispatch(navigator, bindings))
    }

    /// Bind the no-op route.
    pub fn pass(self) -> Binding<K> {
        Binding::new(self.key, pass())
    }

    /// Bind an already constructed route.
    pub fn route(self, route: Route) -> Binding<K> {
        Binding::new(self.key, route)
    }
}
