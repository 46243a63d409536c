//! Reference catalog loader.
//!
//! The catalog is a JSON document mapping category names to card reference
//! lists (plus optional embedded holiday events). A local copy wins when it
//! exists; otherwise the document is fetched from the configured URL.

pub mod error;

use std::path::Path;

use cardyear_core::catalog::Catalog;
use reqwest::Client;

pub use error::{Error, Result};

/// Load the catalog: local file first, remote URL as fallback.
///
/// Fails with [`Error::NoSource`] when neither a readable file nor a URL is
/// available.
pub async fn load(path: Option<&Path>, url: Option<&str>) -> Result<Catalog> {
  if let Some(path) = path
    && path.exists()
  {
    tracing::info!(path = %path.display(), "loading local catalog");
    return from_path(path);
  }

  if let Some(url) = url {
    tracing::info!(url, "fetching remote catalog");
    return from_url(url).await;
  }

  Err(Error::NoSource)
}

/// Read and parse a catalog document from disk.
pub fn from_path(path: &Path) -> Result<Catalog> {
  let raw = std::fs::read_to_string(path)?;
  Ok(serde_json::from_str(&raw)?)
}

/// Fetch and parse a catalog document over HTTP.
pub async fn from_url(url: &str) -> Result<Catalog> {
  let response = Client::new().get(url).send().await?.error_for_status()?;
  Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_a_full_catalog_document() {
    let raw = r#"{
      "baseUrl": "https://cards.example/",
      "categories": {
        "general": ["g1", "g2"],
        "weekend": ["w1"]
      },
      "events": [
        { "name": "New Year", "slug": "newyear",
          "startDate": "01-01", "endDate": "01-01" }
      ]
    }"#;

    let catalog: Catalog = serde_json::from_str(raw).unwrap();
    assert_eq!(catalog.base_url.as_deref(), Some("https://cards.example/"));
    assert_eq!(catalog.categories["general"], vec!["g1", "g2"]);
    assert_eq!(catalog.events.len(), 1);
    assert_eq!(catalog.events[0].slug, "newyear");
  }

  #[test]
  fn tolerates_a_minimal_document() {
    let catalog: Catalog =
      serde_json::from_str(r#"{ "categories": {} }"#).unwrap();
    assert!(catalog.base_url.is_none());
    assert!(catalog.categories.is_empty());
    assert!(catalog.events.is_empty());
  }

  #[tokio::test]
  async fn missing_file_and_url_is_an_error() {
    let result = load(None, None).await;
    assert!(matches!(result, Err(Error::NoSource)));
  }

  #[tokio::test]
  async fn missing_local_file_falls_through_to_no_source() {
    let path = Path::new("definitely-missing-catalog.json");
    let result = load(Some(path), None).await;
    assert!(matches!(result, Err(Error::NoSource)));
  }
}
