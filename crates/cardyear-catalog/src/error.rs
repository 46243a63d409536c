//! Error types for `cardyear-catalog`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no catalog source configured: need a local path or a URL")]
  NoSource,

  #[error("reading catalog file: {0}")]
  Io(#[from] std::io::Error),

  #[error("fetching catalog: {0}")]
  Http(#[from] reqwest::Error),

  #[error("parsing catalog document: {0}")]
  Parse(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
