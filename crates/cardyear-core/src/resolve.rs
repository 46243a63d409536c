//! The content-resolution seam and the hydration pass.
//!
//! The engine only assigns reference identifiers; turning a reference into
//! actual card content requires navigating to its page, which is the job of
//! an external [`ContentResolver`] implementation. This module defines the
//! trait and the sequential pass that walks a finished [`Calendar`] and
//! attaches the resolved content to every assignment.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  calendar::{Calendar, CalendarDay},
  season::Season,
};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Resolves one reference identifier into an opaque card-content record.
///
/// Implementations live outside this crate (the production resolver drives
/// a headless browser and reads the page's embedded client state).
pub trait ContentResolver {
  type Error: std::error::Error + Send + Sync + 'static;

  fn resolve<'a>(
    &'a self,
    reference_id: &'a str,
  ) -> impl Future<Output = Result<serde_json::Value, Self::Error>> + Send + 'a;
}

// ─── Hydrated output ─────────────────────────────────────────────────────────

/// A reference identifier paired with its resolved content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
  pub reference_id: String,
  pub content:      serde_json::Value,
}

/// A holiday assignment with its resolved card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCard {
  pub name: String,
  pub card: CardRecord,
}

/// A calendar day with every assignment resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydratedDay {
  pub date:          DateTime<Utc>,
  pub weekday_index: u32,
  pub season:        Season,
  pub category_card: CardRecord,
  pub holiday_cards: Vec<HolidayCard>,
}

/// A fully resolved calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydratedCalendar {
  pub year:             i32,
  pub birthday_card:    CardRecord,
  pub anniversary_card: CardRecord,
  pub days:             Vec<HydratedDay>,
}

// ─── Hydration pass ──────────────────────────────────────────────────────────

/// Resolve every reference in `calendar`, one at a time, in calendar order.
///
/// The engine's uniqueness invariant means each reference appears exactly
/// once, so each is resolved exactly once. The first resolver error aborts
/// the pass.
pub async fn hydrate<R: ContentResolver>(
  calendar: &Calendar,
  resolver: &R,
) -> Result<HydratedCalendar, R::Error> {
  let birthday_card =
    resolve_one(resolver, &calendar.birthday_reference).await?;
  let anniversary_card =
    resolve_one(resolver, &calendar.anniversary_reference).await?;

  let mut days = Vec::with_capacity(calendar.days.len());
  for day in &calendar.days {
    days.push(hydrate_day(resolver, day).await?);
  }

  Ok(HydratedCalendar {
    year: calendar.year,
    birthday_card,
    anniversary_card,
    days,
  })
}

async fn hydrate_day<R: ContentResolver>(
  resolver: &R,
  day: &CalendarDay,
) -> Result<HydratedDay, R::Error> {
  let category_card = resolve_one(resolver, &day.category_assignment).await?;

  let mut holiday_cards = Vec::with_capacity(day.holiday_assignments.len());
  for assignment in &day.holiday_assignments {
    holiday_cards.push(HolidayCard {
      name: assignment.name.clone(),
      card: resolve_one(resolver, &assignment.reference_id).await?,
    });
  }

  Ok(HydratedDay {
    date: day.date,
    weekday_index: day.weekday_index,
    season: day.season,
    category_card,
    holiday_cards,
  })
}

async fn resolve_one<R: ContentResolver>(
  resolver: &R,
  reference_id: &str,
) -> Result<CardRecord, R::Error> {
  let content = resolver.resolve(reference_id).await?;
  Ok(CardRecord { reference_id: reference_id.to_string(), content })
}
