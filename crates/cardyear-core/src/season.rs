//! Season classification: a month-number to season-label mapping carried
//! on each day record as enrichment.

use serde::{Deserialize, Serialize};

/// Northern-hemisphere meteorological season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
  Spring,
  Summer,
  Fall,
  Winter,
}

impl Season {
  /// Classify a 1-based month number.
  ///
  /// # Panics
  ///
  /// Panics if `month` is not in `1..=12`.
  pub fn for_month(month: u32) -> Self {
    match month {
      3..=5 => Self::Spring,
      6..=8 => Self::Summer,
      9..=11 => Self::Fall,
      12 | 1 | 2 => Self::Winter,
      _ => panic!("month out of range: {month}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_twelve_months_classify() {
    let expected = [
      (1, Season::Winter),
      (2, Season::Winter),
      (3, Season::Spring),
      (4, Season::Spring),
      (5, Season::Spring),
      (6, Season::Summer),
      (7, Season::Summer),
      (8, Season::Summer),
      (9, Season::Fall),
      (10, Season::Fall),
      (11, Season::Fall),
      (12, Season::Winter),
    ];
    for (month, season) in expected {
      assert_eq!(Season::for_month(month), season, "month {month}");
    }
  }

  #[test]
  fn serialises_lowercase() {
    let json = serde_json::to_string(&Season::Fall).unwrap();
    assert_eq!(json, "\"fall\"");
  }
}
