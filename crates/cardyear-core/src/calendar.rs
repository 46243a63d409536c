//! The assembled calendar, the engine's output data model.
//!
//! Field names follow the persisted-document contract (`birthdayReference`,
//! `weekdayIndex`, `holidayAssignments`, ...), so serialising a [`Calendar`]
//! with `serde_json` yields the snapshot format directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::season::Season;

/// One holiday reference attached to a day (the first day of the event's
/// window).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayAssignment {
  pub name:         String,
  pub reference_id: String,
}

/// One day's assignments. Created once during the engine run and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
  /// UTC midnight of the calendar day.
  pub date:                DateTime<Utc>,
  /// 0 = Sunday .. 6 = Saturday.
  pub weekday_index:       u32,
  pub season:              Season,
  pub holiday_assignments: Vec<HolidayAssignment>,
  pub category_assignment: String,
}

/// The aggregate result of one engine run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
  pub year:                  i32,
  pub birthday_reference:    String,
  pub anniversary_reference: String,
  /// One record per day of `year`, in date order.
  pub days:                  Vec<CalendarDay>,
}
