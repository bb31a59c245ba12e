// Mon Oct 19 2026 - Alex

use crate::xjson::kind::{format_date, format_timestamp};
use crate::xjson::{ExtensionKind, Value, XJsonError, TYPE_KEY};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Serializer};
use std::fmt;
use std::io;

/// Compact JSON with `", "` and `": "` separators, the layout existing
/// cache entries were written with.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

struct Spaced<'a>(&'a serde_json::Value);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.0.serialize(&mut ser).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

/// Encodes `value` as text. Non-ASCII characters are written as UTF-8,
/// not `\u` escapes.
pub fn encode(value: &Value) -> String {
    Spaced(&to_json(value)).to_string()
}

pub fn decode(text: &str) -> Result<Value, XJsonError> {
    decode_slice(text.as_bytes())
}

pub fn decode_slice(raw: &[u8]) -> Result<Value, XJsonError> {
    let tree: serde_json::Value = serde_json::from_slice(raw)?;
    from_json(tree)
}

/// Lowers a value into a plain JSON tree, extension values becoming tagged
/// objects.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(n.clone()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), to_json(item)))
                .collect(),
        ),
        Value::DateTime(ts) => tagged(ExtensionKind::DateTime, format_timestamp(ts)),
        Value::Date(date) => tagged(ExtensionKind::Date, format_date(date)),
        Value::Decimal(d) => tagged(ExtensionKind::Decimal, d.to_string()),
        Value::Uuid(id) => tagged(ExtensionKind::Uuid, id.hyphenated().to_string()),
        Value::Unknown(map) => serde_json::Value::Object(map.clone()),
    }
}

fn tagged(kind: ExtensionKind, text: String) -> serde_json::Value {
    let mut object = Map::new();
    object.insert(TYPE_KEY.to_string(), kind.tag().into());
    object.insert(kind.field().to_string(), text.into());
    serde_json::Value::Object(object)
}

/// Lifts a plain JSON tree, turning tagged objects back into extension
/// values. Objects with an unrecognised tag are kept as `Value::Unknown`.
pub fn from_json(tree: serde_json::Value) -> Result<Value, XJsonError> {
    match tree {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => Ok(Value::Number(n)),
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_json::Value::Object(map) => from_object(map),
    }
}

enum Tag {
    Plain,
    Known(ExtensionKind),
    Unknown,
}

fn from_object(map: Map<String, serde_json::Value>) -> Result<Value, XJsonError> {
    let tag = match map.get(TYPE_KEY) {
        None => Tag::Plain,
        Some(serde_json::Value::String(tag)) => {
            ExtensionKind::from_tag(tag).map_or(Tag::Unknown, Tag::Known)
        }
        Some(_) => Tag::Unknown,
    };

    match tag {
        Tag::Plain => map
            .into_iter()
            .map(|(key, item)| Ok((key, from_json(item)?)))
            .collect::<Result<IndexMap<_, _>, XJsonError>>()
            .map(Value::Object),
        Tag::Known(kind) => decode_extension(kind, &map),
        Tag::Unknown => {
            log::debug!("passing through object with unknown {}: {:?}", TYPE_KEY, map.get(TYPE_KEY));
            Ok(Value::Unknown(map))
        }
    }
}

fn decode_extension(
    kind: ExtensionKind,
    map: &Map<String, serde_json::Value>,
) -> Result<Value, XJsonError> {
    let companion = map.get(kind.field()).ok_or(XJsonError::MissingField {
        kind: kind.name(),
        field: kind.field(),
    })?;

    match companion.as_str() {
        Some(text) => kind.parse(text),
        None => Err(kind.malformed(companion.to_string(), "expected a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xjson::Timestamp;
    use bigdecimal::BigDecimal;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;
    use serde_json::json;
    use std::str::FromStr;
    use uuid::Uuid;

    fn roundtrip(value: &Value) -> Value {
        decode(&encode(value)).unwrap()
    }

    #[test]
    fn test_datetime_encoding() {
        let dt = NaiveDate::from_ymd_opt(2016, 5, 2)
            .unwrap()
            .and_hms_opt(9, 22, 11)
            .unwrap();
        assert_eq!(
            encode(&Value::from(dt)),
            r#"{"__type__": "__datetime__", "isoformat": "2016-05-02T09:22:11"}"#
        );

        let decoded = decode(r#"{"__type__": "__datetime__", "isoformat": "2016-05-02T09:22:11"}"#).unwrap();
        assert_eq!(decoded, Value::from(dt));
    }

    #[test]
    fn test_aware_datetime_decoding() {
        let decoded =
            decode(r#"{"__type__": "__datetime__", "isoformat": "2016-05-02T09:22:11+00:00"}"#).unwrap();
        let expected = Utc.with_ymd_and_hms(2016, 5, 2, 9, 22, 11).unwrap();
        assert_eq!(decoded, Value::from(expected));
    }

    #[test]
    fn test_microsecond_datetime() {
        let dt = NaiveDate::from_ymd_opt(2016, 5, 2)
            .unwrap()
            .and_hms_micro_opt(9, 22, 11, 12221)
            .unwrap();
        let text = r#"{"__type__": "__datetime__", "isoformat": "2016-05-02T09:22:11.012221"}"#;
        assert_eq!(encode(&Value::from(dt)), text);
        assert_eq!(decode(text).unwrap(), Value::from(dt));
    }

    #[test]
    fn test_date_encoding() {
        let date = NaiveDate::from_ymd_opt(2016, 5, 2).unwrap();
        assert_eq!(
            encode(&Value::from(date)),
            r#"{"__type__": "__date__", "isoformat": "2016-05-02"}"#
        );
        assert_eq!(
            decode(r#"{"__type__": "__date__", "isoformat": "2016-05-02"}"#).unwrap(),
            Value::from(date)
        );
    }

    #[test]
    fn test_nested_roundtrip() {
        let now = Utc::now();
        let today = now.date_naive();
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();

        let value = Value::object(vec![
            ("dates", Value::from(vec![Value::from(now), Value::from(today)])),
            (
                "meta",
                Value::object(vec![
                    ("local", Value::from(now.with_timezone(&offset))),
                    ("naive", Value::from(now.naive_utc())),
                    ("price", Value::from(BigDecimal::from_str("19.990").unwrap())),
                    ("id", Value::from(Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0))),
                ]),
            ),
            ("none", Value::Null),
        ]);

        assert_eq!(roundtrip(&value), value);
    }

    #[test]
    fn test_plain_values_roundtrip() {
        let values = vec![
            Value::from(0),
            Value::from(1),
            Value::from(1.1),
            Value::from("1"),
            Value::from("1.1"),
            Value::from(vec![1]),
            Value::Array(Vec::new()),
            Value::from(true),
            Value::from(false),
            Value::Null,
            Value::object(vec![("a", "b")]),
        ];
        for value in values {
            assert_eq!(roundtrip(&value), value);
        }
    }

    #[test]
    fn test_encoding_layout() {
        let value = Value::object(vec![
            ("servers", Value::from(vec![Value::from("1.2.3.4"), Value::Null])),
            ("empty", Value::object(Vec::<(String, Value)>::new())),
            ("name", Value::from("caf\u{e9} \"x\"")),
        ]);
        assert_eq!(
            encode(&value),
            "{\"servers\": [\"1.2.3.4\", null], \"empty\": {}, \"name\": \"caf\u{e9} \\\"x\\\"\"}"
        );
        assert_eq!(encode(&Value::Array(Vec::new())), "[]");
    }

    #[test]
    fn test_tuple_decodes_as_array() {
        let value = Value::from((1, 2, 3));
        assert_eq!(encode(&value), "[1, 2, 3]");
        assert_eq!(roundtrip(&value), Value::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_decimal_and_uuid_wire_format() {
        let id = Uuid::parse_str("936DA01F-9ABD-4D9D-80C7-02AF85C822A8").unwrap();
        assert_eq!(
            encode(&Value::from(id)),
            r#"{"__type__": "__uuid__", "uuid": "936da01f-9abd-4d9d-80c7-02af85c822a8"}"#
        );

        let decimal = decode(r#"{"__type__": "__decimal__", "decimal": "3.14159265358979323846264338327950288"}"#)
            .unwrap();
        assert_eq!(
            decimal,
            Value::from(BigDecimal::from_str("3.14159265358979323846264338327950288").unwrap())
        );
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        let text = r#"{"__type__": "__model__", "serialized": "[]", "extra": 1}"#;
        let decoded = decode(text).unwrap();

        match &decoded {
            Value::Unknown(map) => {
                assert_eq!(map.get("__type__"), Some(&json!("__model__")));
                assert_eq!(map.get("serialized"), Some(&json!("[]")));
                assert_eq!(map.get("extra"), Some(&json!(1)));
            }
            other => panic!("expected unknown value, got {:?}", other),
        }
        assert_eq!(encode(&decoded), text);
    }

    #[test]
    fn test_non_string_tag_passes_through() {
        let decoded = decode(r#"{"__type__": 5}"#).unwrap();
        assert_eq!(decoded.kind_name(), "unknown");
    }

    #[test]
    fn test_missing_companion_is_error() {
        let err = decode(r#"{"__type__": "__date__"}"#).unwrap_err();
        assert!(matches!(
            err,
            XJsonError::MissingField { kind: "date", field: "isoformat" }
        ));
    }

    #[test]
    fn test_malformed_companion_is_error() {
        let err = decode(r#"{"__type__": "__uuid__", "uuid": "nope"}"#).unwrap_err();
        assert_eq!(err.kind(), Some("uuid"));

        let err = decode(r#"{"__type__": "__datetime__", "isoformat": 12}"#).unwrap_err();
        assert_eq!(err.kind(), Some("datetime"));

        let err = decode(r#"[{"__type__": "__decimal__", "decimal": "abc"}]"#).unwrap_err();
        assert_eq!(err.kind(), Some("decimal"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(decode("{"), Err(XJsonError::Parse(_))));
        assert!(matches!(decode(""), Err(XJsonError::Parse(_))));
    }

    #[test]
    fn test_timestamp_variant_kept() {
        let decoded = decode(r#"{"__type__": "__datetime__", "isoformat": "2016-05-02T09:22:11"}"#).unwrap();
        assert!(matches!(decoded, Value::DateTime(Timestamp::Naive(_))));
    }

    proptest! {
        #[test]
        fn test_decimal_roundtrip(digits in "-?[0-9]{1,40}(\\.[0-9]{1,40})?") {
            let value = Value::from(BigDecimal::from_str(&digits).unwrap());
            prop_assert_eq!(roundtrip(&value), value);
        }

        #[test]
        fn test_uuid_roundtrip(raw in any::<u128>()) {
            let value = Value::from(Uuid::from_u128(raw));
            prop_assert_eq!(roundtrip(&value), value);
        }

        #[test]
        fn test_timestamp_roundtrip(secs in 0i64..4_102_444_800, nanos in 0u32..1_000_000_000, offset_secs in -43_200i32..=50_400) {
            let utc = chrono::DateTime::from_timestamp(secs, nanos).unwrap();
            let offset = FixedOffset::east_opt(offset_secs).unwrap();

            let aware = Value::from(utc.with_timezone(&offset));
            prop_assert_eq!(roundtrip(&aware), aware);

            let naive = Value::from(utc.naive_utc());
            prop_assert_eq!(roundtrip(&naive), naive);
        }
    }
}
