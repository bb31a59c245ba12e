// Mon Oct 19 2026 - Alex

use crate::xjson::{decode_slice, encode, Value, XJsonError};
use bytes::Bytes;

/// Byte boundary used by cache backends to store application values.
pub trait CacheSerializer: Send + Sync {
    fn serialize(&self, value: &Value) -> Bytes;
    fn deserialize(&self, raw: &[u8]) -> Result<Value, XJsonError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XJsonSerializer;

impl XJsonSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl CacheSerializer for XJsonSerializer {
    fn serialize(&self, value: &Value) -> Bytes {
        Bytes::from(encode(value))
    }

    fn deserialize(&self, raw: &[u8]) -> Result<Value, XJsonError> {
        decode_slice(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_serializer_roundtrip() {
        let serializer = XJsonSerializer::new();
        let value = Value::object(vec![
            ("server", Value::from("1.2.3.4:10480")),
            ("id", Value::from(Uuid::nil())),
            ("since", Value::from(NaiveDate::from_ymd_opt(2016, 5, 2).unwrap())),
        ]);

        let raw = serializer.serialize(&value);
        assert!(raw.starts_with(b"{\"server\":"));
        assert_eq!(serializer.deserialize(&raw).unwrap(), value);
    }

    #[test]
    fn test_deserialize_text_and_bytes() {
        let serializer = XJsonSerializer::new();
        let from_text = serializer.deserialize("[1, 2]".as_bytes()).unwrap();
        let from_bytes = serializer.deserialize(&Bytes::from_static(b"[1, 2]")).unwrap();
        assert_eq!(from_text, from_bytes);
    }

    #[test]
    fn test_deserialize_garbage() {
        let serializer = XJsonSerializer::new();
        assert!(serializer.deserialize(b"\xff\xfe").is_err());
    }

    #[test]
    fn test_trait_object() {
        let serializer: Box<dyn CacheSerializer> = Box::new(XJsonSerializer);
        let raw = serializer.serialize(&Value::Null);
        assert_eq!(&raw[..], b"null");
    }
}
