//! Canonical UTC timestamps for proof payloads.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a timestamp.
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("invalid RFC 3339 timestamp: {0}")]
    Parse(#[from] chrono::ParseError),
}

/// A UTC instant with exactly one textual form: RFC 3339 with millisecond
/// precision and a trailing `Z`, e.g. `2024-01-01T00:00:00.000Z`.
///
/// Parsing accepts any RFC 3339 offset and precision and normalizes; the
/// stored instant is truncated to millisecond precision so equality,
/// re-rendering, and round-trips are stable. The rendered form is what
/// gets signed, so it must be bit-stable across both proof paths.
#[derive(Debug, Clone)]
pub struct Timestamp {
    inner: DateTime<Utc>,
    rendered: String,
}

impl Timestamp {
    /// The current instant, truncated to millisecond precision.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Parse any RFC 3339 timestamp and normalize it to canonical form.
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        let parsed = DateTime::parse_from_rfc3339(input)?.with_timezone(&Utc);
        Ok(Self::from_datetime(parsed))
    }

    fn from_datetime(instant: DateTime<Utc>) -> Self {
        let truncated = instant
            .with_nanosecond(instant.timestamp_subsec_millis() * 1_000_000)
            .unwrap_or(instant);
        let rendered = truncated.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            inner: truncated,
            rendered,
        }
    }

    /// The canonical textual form.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    pub fn datetime(&self) -> &DateTime<Utc> {
        &self.inner
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Timestamp {}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an RFC 3339 timestamp string")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Timestamp::parse(s).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}
