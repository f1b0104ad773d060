// src/pipeline/mod.rs

//! Pipeline entry points for discovery operations.
//!
//! - `discover`: multi-term search → dedup → thresholds → review scan → ranking
//! - `lookup_candidate`: single-app variant keyed by bundle identifier

pub mod discover;

pub use discover::{DiscoverOptions, discover, lookup_candidate};
