//! Serde adapter for submission timestamps.
//!
//! The backend stores `CURRENT_TIMESTAMP` values from `SQLite`, which are
//! rendered as `YYYY-MM-DD HH:MM:SS` without an offset. Values carrying an
//! RFC 3339 offset are also accepted. Offset-less values are taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses a backend timestamp.
///
/// Returns `None` when the value matches none of the accepted layouts.
#[must_use]
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
}

pub(crate) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp '{raw}'")))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::parse;

    #[rstest]
    #[case::sqlite("2025-03-01 09:30:00")]
    #[case::sqlite_fractional("2025-03-01 09:30:00.000")]
    #[case::iso_without_offset("2025-03-01T09:30:00")]
    #[case::rfc3339_utc("2025-03-01T09:30:00Z")]
    #[case::rfc3339_offset("2025-03-01T10:30:00+01:00")]
    fn accepted_layouts_resolve_to_the_same_instant(#[case] raw: &str) {
        let expected = Utc
            .with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
            .single()
            .expect("fixture timestamp should be unambiguous");

        assert_eq!(parse(raw), Some(expected));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse("yesterday"), None);
    }
}
