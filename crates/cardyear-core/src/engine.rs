//! The calendar assignment engine. One pass per run, terminal afterwards.
//!
//! Run order matters: holiday windows are bound and the catalog partitioned
//! *before* any selection, so reserved and holiday-claimed categories can
//! never leak into an ordinary day's pick. The birthday and anniversary
//! singletons are drawn next (marking the shared tracker), then each day in
//! sequence gets a category reference and any holiday references whose
//! window starts that day.

use chrono::{DateTime, Datelike, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
  Error, Result,
  calendar::{Calendar, CalendarDay, HolidayAssignment},
  catalog::{Catalog, HolidayEvent, PoolSet},
  holiday::HolidayWindows,
  season::Season,
  select::{DEFAULT_MAX_ATTEMPTS, Selector},
  sequence,
};

/// Weekday index (0 = Sunday) that triggers the weekend-pool pick.
const WEEKEND_TRIGGER_WEEKDAY: u32 = 5; // Friday

// ─── Options ─────────────────────────────────────────────────────────────────

/// Engine tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
  /// Resample budget per pick before failing with
  /// [`Error::PoolExhausted`].
  pub max_pick_attempts: usize,
}

impl Default for EngineOptions {
  fn default() -> Self {
    Self { max_pick_attempts: DEFAULT_MAX_ATTEMPTS }
  }
}

// ─── Entry points ────────────────────────────────────────────────────────────

/// Compute the calendar for `year` with an entropy-seeded RNG.
///
/// `configured_events` are merged with any events embedded in the catalog
/// before binding.
pub fn compute_calendar(
  catalog: &Catalog,
  configured_events: &[HolidayEvent],
  year: i32,
) -> Result<Calendar> {
  compute_calendar_with(
    catalog,
    configured_events,
    year,
    StdRng::from_entropy(),
    EngineOptions::default(),
  )
}

/// [`compute_calendar`] with a caller-supplied RNG and options. A seeded
/// RNG makes the run fully reproducible.
pub fn compute_calendar_with<R: Rng>(
  catalog: &Catalog,
  configured_events: &[HolidayEvent],
  year: i32,
  rng: R,
  options: EngineOptions,
) -> Result<Calendar> {
  // 1. Bind holiday windows, then partition the catalog. Partitioning needs
  //    the bound slugs, so this order is a hard precondition.
  let mut events = catalog.events.clone();
  events.extend_from_slice(configured_events);
  let windows = HolidayWindows::bind(&events, &catalog.categories, year)?;
  let pools = PoolSet::partition(catalog, windows.bound_slugs());

  let mut selector = Selector::new(rng, options.max_pick_attempts);

  // 2. Run-wide singletons, drawn before any day-level pick but sharing the
  //    same tracker.
  let birthday_reference = selector.pick_from_list(&pools.birthday)?;
  let anniversary_reference = selector.pick_from_list(&pools.anniversary)?;

  // 3. One record per day.
  let days = sequence::generate(year)?;
  let days = assemble(year, &days, &windows, &pools, &mut selector)?;

  tracing::info!(year, days = days.len(), "calendar assembled");

  Ok(Calendar { year, birthday_reference, anniversary_reference, days })
}

/// Assign references to every day in `days`.
pub(crate) fn assemble<R: Rng>(
  year: i32,
  days: &[DateTime<Utc>],
  windows: &HolidayWindows,
  pools: &PoolSet,
  selector: &mut Selector<R>,
) -> Result<Vec<CalendarDay>> {
  if days.is_empty() {
    return Err(Error::EmptyCalendar(year));
  }

  let mut records = Vec::with_capacity(days.len());
  for &date in days {
    let weekday_index = date.weekday().num_days_from_sunday();

    let use_weekend_pool =
      weekday_index == WEEKEND_TRIGGER_WEEKDAY && !pools.weekend.is_empty();
    let category_assignment = if use_weekend_pool {
      selector.pick_from_list(&pools.weekend)?
    } else {
      selector.pick_from_pool(&pools.general)?
    };

    let mut holiday_assignments = Vec::new();
    for event in windows.active_on(date) {
      let reference_id = selector.pick_from_list(&event.references)?;
      holiday_assignments
        .push(HolidayAssignment { name: event.name.clone(), reference_id });
    }

    records.push(CalendarDay {
      date,
      weekday_index,
      season: Season::for_month(date.month()),
      holiday_assignments,
      category_assignment,
    });
  }

  Ok(records)
}
