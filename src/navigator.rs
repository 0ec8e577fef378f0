//! Navigators - dispatch key extraction from responses.
//!
//! A [`Navigator`] computes the discriminant value a [`Router`](crate::Router)
//! selects bindings by. Navigators are stateless and total: every well-formed
//! response yields a key, with explicit fallbacks (`Series::Unknown`, empty
//! content type) instead of failures.
//!
//! # Example
//!
//! ```ignore
//! use routewire::{any, on, series, status, Series};
//!
//! http.get("/products/100")
//!     .dispatch(series(), vec![
//!         on(Series::Successful).call(|response| async move { Ok(()) }),
//!         any().pass(),
//!     ])
//!     .await?;
//! ```

use std::fmt;

use crate::http::{Response, Series};

/// Extracts a dispatch key from a completed response.
///
/// Implementations must be pure and non-blocking; dispatch evaluates the
/// navigator exactly once per response.
pub trait Navigator: Send + Sync {
    /// Key type bindings are matched against.
    type Key: PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Extract the key from the response.
    fn navigate(&self, response: &Response) -> Self::Key;
}

/// Navigator over exact status codes.
pub struct StatusNavigator;

impl Navigator for StatusNavigator {
    type Key = u16;

    #[inline]
    fn navigate(&self, response: &Response) -> u16 {
        response.status
    }
}

/// Navigator over status series (2xx, 4xx, ...).
pub struct SeriesNavigator;

impl Navigator for SeriesNavigator {
    type Key = Series;

    #[inline]
    fn navigate(&self, response: &Response) -> Series {
        response.series()
    }
}

/// Navigator over the normalized body media type.
pub struct ContentTypeNavigator;

impl Navigator for ContentTypeNavigator {
    type Key = String;

    fn navigate(&self, response: &Response) -> String {
        response.content_type()
    }
}

/// Navigator backed by a custom extraction closure.
pub struct KeyFn<F> {
    extract: F,
}

impl<F, K> Navigator for KeyFn<F>
where
    F: Fn(&Response) -> K + Send + Sync,
    K: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    type Key = K;

    fn navigate(&self, response: &Response) -> K {
        (self.extract)(response)
    }
}

/// Navigate by exact status code.
pub fn status() -> StatusNavigator {
    StatusNavigator
}

/// Navigate by status series.
pub fn series() -> SeriesNavigator {
    SeriesNavigator
}

/// Navigate by normalized content type.
pub fn content_type() -> ContentTypeNavigator {
    ContentTypeNavigator
}

/// Navigate by a custom key extracted with `f`.
pub fn key_fn<F, K>(f: F) -> KeyFn<F>
where
    F: Fn(&Response) -> K + Send + Sync,
    K: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    KeyFn { extract: f }
}
