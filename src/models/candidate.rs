// src/models/candidate.rs

//! Candidate result rows produced by the discovery pipeline.

use serde::{Deserialize, Serialize};

use crate::models::App;

/// A matched review kept as reporting evidence for a candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchedExample {
    /// Comma-joined sorted set of OR-phrases found in the review
    pub matched_any: String,

    /// Star rating of the review
    pub rating: u32,

    /// Truncated, whitespace-normalized excerpt of the review
    pub snippet: String,

    /// Review update timestamp
    pub updated: String,
}

/// One app that passed the thresholds and matched at least one review.
///
/// `matched_count` counts every matching review; `examples` keeps at most
/// the first five in scan order, so `matched_count >= examples.len()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateRow {
    /// The app the matches belong to
    #[serde(flatten)]
    pub app: App,

    /// Number of reviews satisfying the phrase rule
    pub matched_count: usize,

    /// Up to five matched reviews, in review-scan order
    pub examples: Vec<MatchedExample>,
}
