//! Date sequence generation: one UTC-midnight instant per day of a year.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use crate::{Error, Result};

/// Enumerate every calendar day of `year` as a UTC-midnight instant,
/// strictly increasing, Jan 1 through Dec 31 (365 or 366 entries per the
/// leap-year rules).
///
/// Each candidate is built by adding a whole-day offset to the fixed Jan 1
/// anchor rather than by stepping a date in place, so local-time DST shifts
/// have no way to skip or duplicate a day.
pub fn generate(year: i32) -> Result<Vec<DateTime<Utc>>> {
  let anchor = Utc
    .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
    .single()
    .ok_or(Error::YearOutOfRange(year))?;

  let mut days = Vec::with_capacity(366);
  for offset in 0.. {
    let candidate = anchor + Duration::days(offset);
    if candidate.year() != year {
      break;
    }
    days.push(candidate);
  }

  Ok(days)
}
