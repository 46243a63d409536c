//! Error types for `cardyear-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("year {0} cannot be represented as a calendar anchor")]
  YearOutOfRange(i32),

  #[error(
    "holiday event {slug:?} has an invalid {field} offset {value:?}: \
     expected \"MM-DD\""
  )]
  InvalidEventDate {
    slug:  String,
    field: &'static str,
    value: String,
  },

  /// Selection could not find an unused reference within the retry budget.
  ///
  /// The upstream behaviour this replaces resampled forever; a bounded
  /// retry with an explicit failure was chosen instead (see DESIGN.md).
  #[error("no unused reference found after {attempts} attempts")]
  PoolExhausted { attempts: usize },

  #[error("date sequence for year {0} produced no days")]
  EmptyCalendar(i32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
