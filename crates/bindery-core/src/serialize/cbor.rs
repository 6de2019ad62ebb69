use crate::serialize::SerializeError;
use serde::{Serialize, de::DeserializeOwned};
use serde_cbor::{from_slice, to_vec};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Upper bound on a single encoded payload accepted for decoding.
pub const MAX_PAYLOAD_BYTES: usize = 4 * 1024 * 1024;

/// Serialize a value into CBOR bytes.
pub(super) fn serialize<T>(t: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    to_vec(t).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Deserialize CBOR bytes into a value.
///
/// Safety guarantees:
/// - Input size is bounded before decode.
/// - Any panic during decode is caught and reported as a deserialize error.
/// - No panic escapes this function.
pub(super) fn deserialize<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    if bytes.len() > MAX_PAYLOAD_BYTES {
        return Err(SerializeError::Deserialize(
            "payload exceeds maximum allowed size".into(),
        ));
    }

    let result = catch_unwind(AssertUnwindSafe(|| from_slice(bytes)));

    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(SerializeError::Deserialize(err.to_string())),
        Err(_) => Err(SerializeError::Deserialize(
            "panic during CBOR deserialization".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_payload_is_rejected_before_decode() {
        let bytes = vec![0u8; MAX_PAYLOAD_BYTES + 1];
        let err = deserialize::<u8>(&bytes).expect_err("oversized payload must fail");

        assert!(matches!(err, SerializeError::Deserialize(_)));
    }

    #[test]
    fn garbage_reports_deserialize_error() {
        let err = deserialize::<String>(&[0xff, 0x00]).expect_err("garbage must fail");

        assert!(matches!(err, SerializeError::Deserialize(_)));
    }

    #[test]
    fn values_survive_encoding() {
        let bytes = serialize(&vec![1u32, 2, 3]).expect("encode");
        let back: Vec<u32> = deserialize(&bytes).expect("decode");

        assert_eq!(back, vec![1, 2, 3]);
    }
}
