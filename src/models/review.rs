// src/models/review.rs

//! Customer review data structure.

use serde::{Deserialize, Serialize};

/// A single customer review from the reviews feed.
///
/// Reviews are transient: they are scanned for phrase matches and
/// discarded; only matched ones survive into `MatchedExample`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Review title
    pub title: String,

    /// Review body
    pub content: String,

    /// Star rating 1-5 (0 if unparseable)
    pub rating: u32,

    /// Reviewer display name
    pub author: String,

    /// Update timestamp, kept in feed-native format
    pub updated: String,
}
