//! JSON codec using `serde_json`.

use bytes::Bytes;

use crate::error::{Error, Result};

/// Maximum body length carried in a conversion error, in characters.
const SNIPPET_LIMIT: usize = 256;

/// JSON codec for request and response bodies.
pub struct JsonCodec;

impl JsonCodec {
    /// Encode a value to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<Bytes> {
        serde_json::to_vec(value)
            .map(Bytes::from)
            .map_err(Error::Encode)
    }

    /// Decode JSON bytes to a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] carrying a bounded snippet of the raw
    /// body if the bytes cannot be deserialized to type `T`.
    pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|source| Error::Conversion {
            source,
            body: snippet(bytes),
        })
    }
}

/// Lossy, length-bounded rendering of a body for error messages.
fn snippet(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .take(SNIPPET_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct TestStruct {
        id: u32,
        name: String,
    }

    #[test]
    fn test_encode_decode_struct() {
        let original = TestStruct {
            id: 42,
            name: "test".to_string(),
        };

        let encoded = JsonCodec::encode(&original).unwrap();
        let decoded: TestStruct = JsonCodec::decode(&encoded).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_error_is_conversion_with_body() {
        let err = JsonCodec::decode::<TestStruct>(b"not json").unwrap_err();
        match err {
            Error::Conversion { body, .. } => assert_eq!(body, "not json"),
            other => panic!("expected Conversion, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_body_is_bounded() {
        let long = "x".repeat(SNIPPET_LIMIT * 4);
        let err = JsonCodec::decode::<TestStruct>(long.as_bytes()).unwrap_err();
        match err {
            Error::Conversion { body, .. } => assert_eq!(body.chars().count(), SNIPPET_LIMIT),
            other => panic!("expected Conversion, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_mismatched_shape_fails() {
        let err = JsonCodec::decode::<TestStruct>(br#"{"id":"not a number"}"#).unwrap_err();
        assert!(matches!(err, Error::Conversion { .. }));
    }
}
