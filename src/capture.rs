//! Single-assignment capture cell.
//!
//! A [`Capture`] bridges a value produced inside a handler back to the code
//! that awaited the dispatch. The caller creates an empty cell, passes a
//! clone into a typed binding, awaits the dispatch future, then reads the
//! cell. The cell is backed by `tokio::sync::OnceCell`, so the write on the
//! dispatching task is published to whichever thread later reads it.
//!
//! An unset cell is a valid outcome: a typed route receiving an empty body
//! leaves the capture empty rather than failing conversion.
//!
//! # Example
//!
//! ```ignore
//! use routewire::{any, on, status, Capture};
//!
//! let capture = Capture::empty();
//! http.get("/products/100")
//!     .dispatch(status(), vec![
//!         on(200).capture(&capture),
//!         any().pass(),
//!     ])
//!     .await?;
//! let product: Option<Product> = capture.get();
//! ```

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

/// Error returned when a capture cell is written a second time.
///
/// A handler runs at most once per dispatch, so a second write signals a
/// programming error rather than a routine condition.
#[derive(Debug, Error)]
#[error("capture already holds a value")]
pub struct AlreadyCaptured;

/// Cloneable write-once cell for handler results.
#[derive(Debug)]
pub struct Capture<T> {
    cell: Arc<OnceCell<T>>,
}

impl<T> Clone for Capture<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> Default for Capture<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Capture<T> {
    /// Create an unset cell.
    pub fn empty() -> Self {
        Self {
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Store a value, failing if the cell is already set.
    pub fn set(&self, value: T) -> Result<(), AlreadyCaptured> {
        self.cell.set(value).map_err(|_| AlreadyCaptured)
    }

    /// Check whether a value has been stored.
    pub fn is_set(&self) -> bool {
        self.cell.initialized()
    }

    /// Read the stored value, if any.
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.cell.get().cloned()
    }

    /// Consume the capture, returning the stored value without cloning.
    ///
    /// Returns `None` when the cell is unset or other clones are still
    /// alive.
    pub fn into_inner(self) -> Option<T> {
        Arc::try_unwrap(self.cell).ok().and_then(OnceCell::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_reads_as_none() {
        let capture: Capture<String> = Capture::empty();
        assert!(!capture.is_set());
        assert_eq!(capture.get(), None);
    }

    #[test]
    fn test_set_then_get_returns_value() {
        let capture = Capture::empty();
        capture.set(42u32).unwrap();
        assert!(capture.is_set());
        assert_eq!(capture.get(), Some(42));
    }

    #[test]
    fn test_second_set_fails() {
        let capture = Capture::empty();
        capture.set("first").unwrap();
        assert!(capture.set("second").is_err());
        assert_eq!(capture.get(), Some("first"));
    }

    #[test]
    fn test_clones_share_the_same_cell() {
        let capture = Capture::empty();
        let clone = capture.clone();
        clone.set(7i64).unwrap();
        assert_eq!(capture.get(), Some(7));
    }

    #[test]
    fn test_into_inner_moves_the_value_out() {
        let capture = Capture::empty();
        capture.set("owned".to_string()).unwrap();
        assert_eq!(capture.into_inner(), Some("owned".to_string()));
    }

    #[test]
    fn test_write_on_another_thread_is_visible_after_join() {
        let capture = Capture::empty();
        let writer = capture.clone();
        let handle = std::thread::spawn(move || writer.set(1234u64).unwrap());
        handle.join().unwrap();
        assert_eq!(capture.get(), Some(1234));
    }
}
