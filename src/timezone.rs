use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::AppError;

/// Resolve a tz database name. The timezone is the one setting this tool
/// cannot default: an absent, empty, or unknown name is a fatal
/// configuration error.
pub(crate) fn resolve(name: &str) -> Result<Tz, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidTimezone {
            input: name.to_string(),
        });
    }
    Tz::from_str(trimmed).map_err(|_| AppError::InvalidTimezone {
        input: trimmed.to_string(),
    })
}

/// Calendar date of `instant` in `tz`.
pub(crate) fn date_in(tz: Tz, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// The spent date: today as seen from the configured timezone, not the
/// system one.
pub(crate) fn today_in(tz: Tz) -> NaiveDate {
    date_in(tz, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_named_timezone() {
        assert_eq!(
            resolve("America/New_York").unwrap(),
            chrono_tz::America::New_York
        );
        assert_eq!(resolve("Asia/Shanghai").unwrap(), chrono_tz::Asia::Shanghai);
    }

    #[test]
    fn resolve_trims_whitespace() {
        assert_eq!(resolve("  UTC  ").unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn resolve_empty_is_error() {
        let err = resolve("").unwrap_err();
        assert!(matches!(err, AppError::InvalidTimezone { .. }));
    }

    #[test]
    fn resolve_unknown_name_is_error() {
        let err = resolve("Mars/Olympus").unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn date_in_follows_zone_calendar() {
        let instant = "2026-08-07T02:00:00Z".parse::<DateTime<Utc>>().unwrap();
        // 02:00 UTC is already the 7th in Tokyo but still the 6th in New York
        assert_eq!(
            date_in(chrono_tz::Asia::Tokyo, instant).to_string(),
            "2026-08-07"
        );
        assert_eq!(
            date_in(chrono_tz::America::New_York, instant).to_string(),
            "2026-08-06"
        );
    }

    #[test]
    fn date_in_utc_midnight_boundary() {
        let instant = "2026-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(date_in(chrono_tz::UTC, instant).to_string(), "2026-01-01");
        assert_eq!(
            date_in(chrono_tz::America::Los_Angeles, instant).to_string(),
            "2025-12-31"
        );
    }
}
