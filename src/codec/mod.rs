//! Codec module - serialization/deserialization for HTTP bodies.
//!
//! # Design
//!
//! The codec is a marker struct with static methods rather than a trait
//! object. Typed routes bind their target type at compile time, so codec
//! selection is compile-time too; there is no reflective converter lookup
//! at dispatch.
//!
//! # Example
//!
//! ```ignore
//! use routewire::codec::JsonCodec;
//!
//! let encoded = JsonCodec::encode(&"hello")?;
//! let decoded: String = JsonCodec::decode(&encoded)?;
//! assert_eq!(decoded, "hello");
//! ```

mod json;

pub use json::JsonCodec;
