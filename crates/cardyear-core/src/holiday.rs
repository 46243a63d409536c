//! Holiday window resolution.
//!
//! Configured events carry year-agnostic `"MM-DD"` offsets and a slug.
//! Binding fixes the offsets to a target year (UTC midnight), attaches the
//! catalog category matching the slug, and indexes the results by start
//! month. Only the *first day* of a window triggers a pick: lookups match
//! the start instant exactly rather than testing range containment, so a
//! multi-day event contributes one reference, not one per day.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::{Error, Result, catalog::HolidayEvent};

// ─── Bound events ────────────────────────────────────────────────────────────

/// A holiday event fixed to a concrete year, with its reference pool.
#[derive(Debug, Clone)]
pub struct BoundEvent {
  pub name:       String,
  pub slug:       String,
  pub start:      DateTime<Utc>,
  pub end:        DateTime<Utc>,
  /// References drawn from the catalog category named by `slug`.
  pub references: Vec<String>,
}

/// All bound events for one year, indexed by the month of their start date.
#[derive(Debug, Clone, Default)]
pub struct HolidayWindows {
  by_month:    BTreeMap<u32, Vec<BoundEvent>>,
  bound_slugs: BTreeSet<String>,
}

impl HolidayWindows {
  /// Bind `events` to `year`, attaching reference pools from `categories`.
  ///
  /// Events whose slug has no non-empty catalog entry are dropped silently;
  /// a holiday without cards simply does not exist for this run. Malformed
  /// date offsets are a configuration error.
  pub fn bind(
    events: &[HolidayEvent],
    categories: &BTreeMap<String, Vec<String>>,
    year: i32,
  ) -> Result<Self> {
    let mut windows = Self::default();

    for event in events {
      let references = match categories.get(&event.slug) {
        Some(refs) if !refs.is_empty() => refs.clone(),
        _ => {
          tracing::debug!(
            slug = %event.slug,
            "holiday event has no catalog references, dropping"
          );
          continue;
        }
      };

      let start =
        resolve_offset(&event.slug, "startDate", &event.start_date, year)?;
      let end = resolve_offset(&event.slug, "endDate", &event.end_date, year)?;

      let bound = BoundEvent {
        name: event.name.clone(),
        slug: event.slug.clone(),
        start,
        end,
        references,
      };

      windows.bound_slugs.insert(bound.slug.clone());
      windows.by_month.entry(start.month()).or_default().push(bound);
    }

    Ok(windows)
  }

  /// Slugs whose catalog category was claimed by a bound event. The pool
  /// partition withholds these from the general pool.
  pub fn bound_slugs(&self) -> &BTreeSet<String> { &self.bound_slugs }

  /// Events whose window *starts* at exactly `instant` (UTC midnight).
  pub fn active_on(&self, instant: DateTime<Utc>) -> Vec<&BoundEvent> {
    self
      .by_month
      .get(&instant.month())
      .map(|events| events.iter().filter(|e| e.start == instant).collect())
      .unwrap_or_default()
  }
}

/// Parse an `"MM-DD"` offset against `year` into a UTC-midnight instant.
fn resolve_offset(
  slug: &str,
  field: &'static str,
  value: &str,
  year: i32,
) -> Result<DateTime<Utc>> {
  let invalid = || Error::InvalidEventDate {
    slug:  slug.to_string(),
    field,
    value: value.to_string(),
  };

  let (month, day) = value.split_once('-').ok_or_else(invalid)?;
  let month: u32 = month.parse().map_err(|_| invalid())?;
  let day: u32 = day.parse().map_err(|_| invalid())?;

  // Rejects impossible month-days for the bound year (e.g. 02-30).
  Utc
    .with_ymd_and_hms(year, month, day, 0, 0, 0)
    .single()
    .ok_or_else(invalid)
}
