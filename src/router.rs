//! Router - response dispatch engine.
//!
//! A [`Router`] owns a navigator and an ordered binding list. Dispatch
//! evaluates the navigator once, selects a binding, and runs its route.
//! Routers nest: a binding's route may itself be a router over a different
//! navigator (series first, then exact status, in the canonical shape).
//!
//! # Precedence
//!
//! Exact-key bindings always beat wildcards, regardless of declaration
//! order. Among several exact matches the first declared wins, and likewise
//! among several wildcards. A response matching no binding at all fails
//! with [`Error::NoRoute`].

use crate::binding::Binding;
use crate::error::{Error, Result};
use crate::http::Response;
use crate::navigator::Navigator;
use crate::route::BoxFuture;

/// Type-erased dispatch, used to nest routers with differing key types.
pub trait Dispatch: Send + Sync {
    /// Route the response to a handler.
    fn dispatch(&self, response: Response) -> BoxFuture<'_, Result<()>>;
}

/// Dispatch engine selecting among bindings by navigator key.
///
/// Immutable once constructed; a single response triggers a single,
/// non-reentrant dispatch, so no locking is involved.
pub struct Router<N: Navigator> {
    navigator: N,
    bindings: Vec<Binding<N::Key>>,
}

impl<N: Navigator> Router<N> {
    /// Create a router from a navigator and an ordered binding list.
    pub fn new(navigator: N, bindings: Vec<Binding<N::Key>>) -> Self {
        Self {
            navigator,
            bindings,
        }
    }

    /// Route a response to the first matching binding and run its handler.
    ///
    /// Selection: first exact key match, then first wildcard. Typed routes
    /// deserialize the body only after selection, exactly once.
    pub async fn dispatch(&self, response: Response) -> Result<()> {
        let key = self.navigator.navigate(&response);

        let selected = self
            .bindings
            .iter()
            .find(|binding| binding.key() == Some(&key))
            .or_else(|| self.bindings.iter().find(|binding| binding.is_wildcard()));

        let Some(binding) = selected else {
            return Err(Error::NoRoute {
                key: format!("{key:?}"),
                status: response.status,
            });
        };

        tracing::debug!(key = ?key, wildcard = binding.is_wildcard(), "dispatching response");
        binding.route().run(response).await
    }
}

impl<N> Dispatch for Router<N>
where
    N: Navigator + 'static,
{
    fn dispatch(&self, response: Response) -> BoxFuture<'_, Result<()>> {
        Box::pin(Router::dispatch(self, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::binding::{any, on};
    use crate::error::BoxError;
    use crate::http::Series;
    use crate::navigator::{series, status};
    use crate::route::pass;

    /// Binding whose handler records the marker when invoked.
    fn recording(key: Option<u16>, marker: u16, hits: &Arc<AtomicU16>) -> Binding<u16> {
        let hits = hits.clone();
        let handler = move |_response: Response| {
            let hits = hits.clone();
            async move {
                hits.store(marker, Ordering::SeqCst);
                Ok(())
            }
        };
        match key {
            Some(key) => on(key).call(handler),
            None => any().call(handler),
        }
    }

    #[tokio::test]
    async fn test_exact_match_wins_over_wildcard() {
        let hits = Arc::new(AtomicU16::new(0));
        let router = Router::new(
            status(),
            vec![
                recording(Some(200), 1, &hits),
                recording(None, 99, &hits),
            ],
        );

        router.dispatch(Response::new(200)).await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exact_match_wins_even_when_declared_after_wildcard() {
        let hits = Arc::new(AtomicU16::new(0));
        let router = Router::new(
            status(),
            vec![
                recording(None, 99, &hits),
                recording(Some(200), 1, &hits),
            ],
        );

        router.dispatch(Response::new(200)).await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_first_declared_exact_match_wins() {
        let hits = Arc::new(AtomicU16::new(0));
        let router = Router::new(
            status(),
            vec![
                recording(Some(200), 1, &hits),
                recording(Some(200), 2, &hits),
            ],
        );

        router.dispatch(Response::new(200)).await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wildcard_catches_unmatched_keys() {
        let hits = Arc::new(AtomicU16::new(0));
        let router = Router::new(
            status(),
            vec![
                recording(Some(200), 1, &hits),
                recording(None, 99, &hits),
            ],
        );

        router.dispatch(Response::new(503)).await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 99);
    }

    #[tokio::test]
    async fn test_no_match_is_a_routing_miss() {
        let router = Router::new(status(), vec![on(200).pass()]);

        let err = router.dispatch(Response::new(503)).await.unwrap_err();
        match err {
            Error::NoRoute { key, status } => {
                assert_eq!(key, "503");
                assert_eq!(status, 503);
            }
            other => panic!("expected NoRoute, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handler_errors_are_wrapped_with_cause() {
        let router = Router::new(
            status(),
            vec![on(503).call(|_response| async {
                Err(Box::new(std::fmt::Error) as BoxError)
            })],
        );

        let err = router.dispatch(Response::new(503)).await.unwrap_err();
        match err {
            Error::Handler(cause) => assert!(cause.downcast_ref::<std::fmt::Error>().is_some()),
            other => panic!("expected Handler, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_nested_router_is_reached_through_outer_binding() {
        let inner_hits = Arc::new(AtomicUsize::new(0));
        let hits = inner_hits.clone();
        let router = Router::new(
            series(),
            vec![
                on(Series::Successful).pass(),
                on(Series::ClientError).dispatch(
                    status(),
                    vec![
                        on(404).call(move |_response| {
                            let hits = hits.clone();
                            async move {
                                hits.fetch_add(1, Ordering::SeqCst);
                                Ok(())
                            }
                        }),
                        any().pass(),
                    ],
                ),
                any().pass(),
            ],
        );

        router.dispatch(Response::new(404)).await.unwrap();
        assert_eq!(inner_hits.load(Ordering::SeqCst), 1);

        // A 2xx response never reaches the inner router.
        router.dispatch(Response::new(200)).await.unwrap();
        assert_eq!(inner_hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_nested_miss_propagates_inner_key() {
        let router = Router::new(
            series(),
            vec![on(Series::ClientError).dispatch(status(), vec![on(404).pass()])],
        );

        let err = router.dispatch(Response::new(429)).await.unwrap_err();
        match err {
            Error::NoRoute { key, status } => {
                assert_eq!(key, "429");
                assert_eq!(status, 429);
            }
            other => panic!("expected NoRoute, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_series_router_routes_unknown_codes_to_wildcard() {
        let hits = Arc::new(AtomicU16::new(0));
        let marker = hits.clone();
        let router = Router::new(
            series(),
            vec![
                on(Series::Successful).pass(),
                any().call(move |_response| {
                    let marker = marker.clone();
                    async move {
                        marker.store(1, Ordering::SeqCst);
                        Ok(())
                    }
                }),
            ],
        );

        router.dispatch(Response::new(99)).await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pass_binding_compiles_for_any_key_type() {
        let _status: Router<crate::navigator::StatusNavigator> =
            Router::new(status(), vec![any().route(pass())]);
    }
}
