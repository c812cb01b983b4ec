//! ISO-8601 local date-times with optional seconds.
//!
//! Accepts `2023-01-03T00:00:00`, `2023-01-03T00:00:00.250` and `2023-01-03T00:00`.
//! Serialization is left to chrono, which always writes seconds.

use chrono::{NaiveDateTime, ParseError};
use serde::{de::Error, Deserialize, Deserializer};

const WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
const WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

pub fn parse(s: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(s, WITH_SECONDS).or_else(|_| NaiveDateTime::parse_from_str(s, WITHOUT_SECONDS))
}

/// For `#[serde(deserialize_with = "models::timestamp::deserialize")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(raw.trim()).map_err(|e| D::Error::custom(format!("invalid date-time '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn seconds_are_optional() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap().and_hms_opt(8, 30, 0).unwrap();
        assert_eq!(parse("2023-01-03T08:30").unwrap(), expected);
        assert_eq!(parse("2023-01-03T08:30:00").unwrap(), expected);
        assert_eq!(
            parse("2023-01-03T08:30:00.250").unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 3).unwrap().and_hms_milli_opt(8, 30, 0, 250).unwrap()
        );
    }

    #[test]
    fn rejects_dates_without_time() {
        assert!(parse("2023-01-03").is_err());
        assert!(parse("2023-01-03T08").is_err());
    }
}
