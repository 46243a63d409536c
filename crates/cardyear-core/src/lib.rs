//! Core types and logic for the Cardyear calendar assignment engine.
//!
//! Given a catalog of categorised card references and a set of
//! date-windowed holiday events, the engine assigns one category reference
//! to every day of a target year (plus zero or more holiday references and
//! two run-wide singletons), guaranteeing that no reference is used twice
//! in a single run.
//!
//! This crate is deliberately free of I/O: loading the catalog lives in
//! `cardyear-catalog`, persistence and argument handling in `cardyear-cli`.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod calendar;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod holiday;
pub mod resolve;
pub mod season;
pub mod select;
pub mod sequence;


pub use error::{Error, Result};
