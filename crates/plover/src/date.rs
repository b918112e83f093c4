use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateError {
    #[error("invalid date '{date}': {source}")]
    Parse {
        date: String,
        source: chrono::ParseError,
    },

    #[error("date '{date}' does not exist in timezone {timezone:?}")]
    Nonexistent { date: String, timezone: Tz },
}

/// Parses a front matter date.
///
/// Accepts RFC 3339 date-times, local date-times (`2020-04-01T09:30:00`) and
/// plain dates (`2020-04-01`). Values without an offset are read in `timezone`.
pub fn parse_date(date: &str, timezone: Tz) -> Result<DateTime<Tz>, DateError> {
    let parse_error = |source| DateError::Parse {
        date: date.to_string(),
        source,
    };

    if !date.contains('T') {
        let naive = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(parse_error)?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| nonexistent(date, timezone))?;

        return localize(naive, date, timezone);
    }

    match DateTime::parse_from_rfc3339(date) {
        Ok(date) => Ok(date.with_timezone(&timezone)),
        Err(_) => {
            let naive =
                NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f").map_err(parse_error)?;
            localize(naive, date, timezone)
        }
    }
}

pub fn format_date(date: &str, format: &str, timezone: Tz) -> Result<String, DateError> {
    Ok(parse_date(date, timezone)?.format(format).to_string())
}

fn localize(naive: NaiveDateTime, date: &str, timezone: Tz) -> Result<DateTime<Tz>, DateError> {
    naive
        .and_local_timezone(timezone)
        .earliest()
        .ok_or_else(|| nonexistent(date, timezone))
}

fn nonexistent(date: &str, timezone: Tz) -> DateError {
    DateError::Nonexistent {
        date: date.to_string(),
        timezone,
    }
}
