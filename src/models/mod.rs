// src/models/mod.rs

//! Domain models for the discovery application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod app;
mod candidate;
mod config;
mod review;

// Re-export all public types
pub use app::App;
pub use candidate::{CandidateRow, MatchedExample};
pub use config::{Config, HttpConfig};
pub use review::Review;
