//! Catalog input types and the pool-partition step.
//!
//! The catalog maps category names to lists of opaque card references. Three
//! category names are reserved for special roles ("weekend", "birthday",
//! "anniversary"), and holiday events claim further categories by slug.
//! [`PoolSet::partition`] carves the catalog into immutable per-role pools
//! up front, so nothing downstream has to mutate the shared mapping to
//! "consume" a category.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Category name reserved for the Friday pick.
pub const WEEKEND_CATEGORY: &str = "weekend";
/// Category name reserved for the run-wide birthday singleton.
pub const BIRTHDAY_CATEGORY: &str = "birthday";
/// Category name reserved for the run-wide anniversary singleton.
pub const ANNIVERSARY_CATEGORY: &str = "anniversary";

// ─── Input document ──────────────────────────────────────────────────────────

/// A configured holiday event. Offsets are year-agnostic `"MM-DD"` strings;
/// [`crate::holiday::HolidayWindows::bind`] turns them into concrete UTC
/// instants for a target year and attaches the reference pool found in the
/// catalog under `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayEvent {
  pub name:       String,
  pub slug:       String,
  /// First day of the window, `"MM-DD"`.
  pub start_date: String,
  /// Last day of the window, `"MM-DD"`.
  pub end_date:   String,
}

/// The catalog document handed to the engine.
///
/// `categories` uses a `BTreeMap` so category choice under a seeded RNG is
/// reproducible run to run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
  /// Site prefix the content resolver prepends to each reference.
  #[serde(default)]
  pub base_url:   Option<String>,
  #[serde(default)]
  pub categories: BTreeMap<String, Vec<String>>,
  /// Holiday events embedded in the catalog itself; merged with the
  /// caller-configured list before binding.
  #[serde(default)]
  pub events:     Vec<HolidayEvent>,
}

// ─── Derived pools ───────────────────────────────────────────────────────────

/// The catalog partitioned by role, computed once before any selection.
///
/// Reserved categories and bound holiday slugs are excluded from `general`,
/// so an ordinary day can never draw from them.
#[derive(Debug, Clone)]
pub struct PoolSet {
  pub general:     BTreeMap<String, Vec<String>>,
  pub weekend:     Vec<String>,
  pub birthday:    Vec<String>,
  pub anniversary: Vec<String>,
}

impl PoolSet {
  /// Partition `catalog` into role pools, withholding every category in
  /// `bound_slugs` (holiday categories already claimed by an event).
  pub fn partition(catalog: &Catalog, bound_slugs: &BTreeSet<String>) -> Self {
    let reserved =
      [WEEKEND_CATEGORY, BIRTHDAY_CATEGORY, ANNIVERSARY_CATEGORY];

    let general = catalog
      .categories
      .iter()
      .filter(|(name, _)| {
        !reserved.contains(&name.as_str()) && !bound_slugs.contains(*name)
      })
      .map(|(name, refs)| (name.clone(), refs.clone()))
      .collect();

    let named = |name: &str| -> Vec<String> {
      catalog.categories.get(name).cloned().unwrap_or_default()
    };

    Self {
      general,
      weekend: named(WEEKEND_CATEGORY),
      birthday: named(BIRTHDAY_CATEGORY),
      anniversary: named(ANNIVERSARY_CATEGORY),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn catalog(entries: &[(&str, &[&str])]) -> Catalog {
    Catalog {
      base_url:   None,
      categories: entries
        .iter()
        .map(|(name, refs)| {
          (
            name.to_string(),
            refs.iter().map(|r| r.to_string()).collect(),
          )
        })
        .collect(),
      events:     vec![],
    }
  }

  #[test]
  fn reserved_categories_leave_the_general_pool() {
    let c = catalog(&[
      ("weekend", &["w1"]),
      ("birthday", &["b1"]),
      ("anniversary", &["a1"]),
      ("general", &["g1", "g2"]),
    ]);

    let pools = PoolSet::partition(&c, &BTreeSet::new());
    assert_eq!(pools.general.len(), 1);
    assert!(pools.general.contains_key("general"));
    assert_eq!(pools.weekend, vec!["w1"]);
    assert_eq!(pools.birthday, vec!["b1"]);
    assert_eq!(pools.anniversary, vec!["a1"]);
  }

  #[test]
  fn bound_slugs_leave_the_general_pool() {
    let c = catalog(&[("newyear", &["n1"]), ("general", &["g1"])]);
    let bound = BTreeSet::from(["newyear".to_string()]);

    let pools = PoolSet::partition(&c, &bound);
    assert!(!pools.general.contains_key("newyear"));
    assert!(pools.general.contains_key("general"));
  }

  #[test]
  fn missing_reserved_categories_yield_empty_pools() {
    let c = catalog(&[("general", &["g1"])]);
    let pools = PoolSet::partition(&c, &BTreeSet::new());
    assert!(pools.weekend.is_empty());
    assert!(pools.birthday.is_empty());
    assert!(pools.anniversary.is_empty());
  }

  #[test]
  fn holiday_event_round_trips_with_contract_field_names() {
    let raw = r#"{
      "name": "New Year",
      "slug": "newyear",
      "startDate": "01-01",
      "endDate": "01-01"
    }"#;
    let event: HolidayEvent = serde_json::from_str(raw).unwrap();
    assert_eq!(event.slug, "newyear");
    assert_eq!(event.start_date, "01-01");

    let json = serde_json::to_value(&event).unwrap();
    assert!(json.get("startDate").is_some());
    assert!(json.get("endDate").is_some());
  }
}
