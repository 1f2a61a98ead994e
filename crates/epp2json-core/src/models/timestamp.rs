//! Serde adapter for optional EPP timestamps.
//!
//! Unset timestamps are written as the zero instant `0001-01-01T00:00:00Z`
//! rather than `null`, which keeps the output shape identical for every
//! invoice. Reading the zero instant back yields `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Zero-instant representation of an unset timestamp.
pub const UNSET: &str = "0001-01-01T00:00:00Z";

/// The calendar value behind [`UNSET`].
pub fn unset_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.collect_str(&ts.and_utc().format("%Y-%m-%dT%H:%M:%SZ")),
        None => serializer.serialize_str(UNSET),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let parsed = DateTime::parse_from_rfc3339(&raw)
        .map_err(serde::de::Error::custom)?
        .with_timezone(&Utc)
        .naive_utc();

    if parsed == unset_instant() {
        Ok(None)
    } else {
        Ok(Some(parsed))
    }
}
