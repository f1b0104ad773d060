// src/services/mod.rs

//! Service layer for the discovery application.
//!
//! This module contains the business logic for:
//! - Catalog search and lookup (`CatalogClient`)
//! - Paginated review retrieval (`ReviewFetcher`)
//! - AND/OR phrase matching (`match_phrases`)

mod catalog;
mod matcher;
mod reviews;

pub use catalog::{CatalogClient, DEFAULT_LIMIT_PER_TERM};
pub use matcher::{PhraseMatch, match_phrases};
pub use reviews::ReviewFetcher;
