// Mon Oct 19 2026 - Alex

use crate::xjson::{Timestamp, Value, XJsonError};
use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use std::str::FromStr;
use uuid::Uuid;

/// Reserved key marking an object as an extension value.
pub const TYPE_KEY: &str = "__type__";

const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    DateTime,
    Date,
    Decimal,
    Uuid,
}

impl ExtensionKind {
    pub const ALL: [ExtensionKind; 4] = [
        ExtensionKind::DateTime,
        ExtensionKind::Date,
        ExtensionKind::Decimal,
        ExtensionKind::Uuid,
    ];

    /// Value stored under [`TYPE_KEY`].
    pub fn tag(&self) -> &'static str {
        match self {
            Self::DateTime => "__datetime__",
            Self::Date => "__date__",
            Self::Decimal => "__decimal__",
            Self::Uuid => "__uuid__",
        }
    }

    /// Key holding the canonical text.
    pub fn field(&self) -> &'static str {
        match self {
            Self::DateTime | Self::Date => "isoformat",
            Self::Decimal => "decimal",
            Self::Uuid => "uuid",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DateTime => "datetime",
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::Uuid => "uuid",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn parse(&self, text: &str) -> Result<Value, XJsonError> {
        let parsed = match self {
            Self::DateTime => parse_timestamp(text).map(Value::DateTime),
            Self::Date => parse_date(text).map(Value::Date),
            Self::Decimal => BigDecimal::from_str(text.trim())
                .map(Value::Decimal)
                .map_err(|e| e.to_string()),
            Self::Uuid => Uuid::parse_str(text.trim())
                .map(Value::Uuid)
                .map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| self.malformed(text, reason))
    }

    pub fn malformed(&self, text: impl Into<String>, reason: impl Into<String>) -> XJsonError {
        XJsonError::Malformed {
            kind: self.name(),
            text: text.into(),
            reason: reason.into(),
        }
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// ISO-8601 text with microseconds when the sub-second part allows it,
/// nanoseconds otherwise, nothing at all on whole seconds.
pub fn format_timestamp(ts: &Timestamp) -> String {
    let naive = ts.naive_local();
    let nanos = naive.nanosecond() % 1_000_000_000;

    let fmt = if nanos == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else if nanos % 1_000 == 0 {
        "%Y-%m-%dT%H:%M:%S%.6f"
    } else {
        "%Y-%m-%dT%H:%M:%S%.9f"
    };

    let mut text = naive.format(fmt).to_string();
    if let Timestamp::Aware(dt) = ts {
        // sub-minute offsets keep their seconds
        let offset = if dt.offset().local_minus_utc() % 60 == 0 { "%:z" } else { "%::z" };
        text.push_str(&dt.format(offset).to_string());
    }
    text
}

pub fn parse_timestamp(text: &str) -> Result<Timestamp, String> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(Timestamp::Aware(dt));
    }
    for fmt in AWARE_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Ok(Timestamp::Aware(dt));
        }
    }
    if let Some((local, offset)) = split_offset_seconds(text) {
        return parse_naive(local)
            .and_then(|dt| offset.from_local_datetime(&dt).single())
            .map(Timestamp::Aware)
            .ok_or_else(|| "not an ISO-8601 timestamp".to_string());
    }
    if let Some(dt) = parse_naive(text) {
        return Ok(Timestamp::Naive(dt));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Timestamp::Naive)
        .ok_or_else(|| "not an ISO-8601 timestamp".to_string())
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// Splits a trailing `+HH:MM:SS` offset, which the offset parsers stop short of.
fn split_offset_seconds(text: &str) -> Option<(&str, FixedOffset)> {
    let at = text.len().checked_sub(9)?;
    let (local, suffix) = (text.get(..at)?, text.get(at..)?.as_bytes());

    let sign = match suffix[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    if suffix[3] != b':' || suffix[6] != b':' {
        return None;
    }

    let field = |range: std::ops::Range<usize>| -> Option<i32> {
        let digits = &suffix[range];
        digits.iter().all(u8::is_ascii_digit).then(|| {
            digits.iter().fold(0, |acc, d| acc * 10 + i32::from(d - b'0'))
        })
    };
    let secs = field(1..3)? * 3600 + field(4..6)? * 60 + field(7..9)?;

    FixedOffset::east_opt(sign * secs).map(|offset| (local, offset))
}

pub fn parse_date(text: &str) -> Result<NaiveDate, String> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }

    parse_timestamp(text)
        .map(|ts| ts.naive_local().date())
        .map_err(|_| "not an ISO-8601 date".to_string())
}
