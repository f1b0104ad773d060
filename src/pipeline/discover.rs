// src/pipeline/discover.rs

//! Candidate discovery pipeline.
//!
//! Orchestrates the catalog client, review fetcher, and phrase matcher:
//! search, dedup, threshold filter, per-app review scan, match
//! aggregation, ranked output.

use crate::error::Result;
use crate::models::{App, CandidateRow, MatchedExample, Review};
use crate::services::{CatalogClient, DEFAULT_LIMIT_PER_TERM, ReviewFetcher, match_phrases};

/// Maximum number of matched examples retained per candidate.
const MAX_EXAMPLES: usize = 5;

/// Maximum snippet length in characters, ellipsis included.
const SNIPPET_MAX_CHARS: usize = 180;

/// Thresholds and phrase rule for a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// Storefront country code
    pub country: String,

    /// Minimum average star rating
    pub min_rating: f64,

    /// Minimum number of ratings
    pub min_rating_count: u64,

    /// Match if ANY of these phrases appears in a review
    pub phrases_any: Vec<String>,

    /// Match only if ALL of these phrases appear in a review
    pub phrases_all: Vec<String>,

    /// How many review pages to fetch per app
    pub max_review_pages: u32,
}

/// Discover candidate apps for a set of seed search terms.
///
/// Apps below the rating thresholds are dropped before any review is
/// fetched. The result is sorted descending by `(matched_count,
/// rating_count)`; ties keep their pre-sort relative order.
pub async fn discover(
    catalog: &CatalogClient,
    reviews: &ReviewFetcher,
    seed_terms: &[String],
    opts: &DiscoverOptions,
) -> Result<Vec<CandidateRow>> {
    let apps = catalog
        .search_by_terms(seed_terms, &opts.country, DEFAULT_LIMIT_PER_TERM)
        .await?;
    let total = apps.len();

    let passing: Vec<App> = apps
        .into_iter()
        .filter(|app| passes_thresholds(app, opts))
        .collect();

    log::info!(
        "{} of {} apps passed thresholds (rating >= {}, count >= {})",
        passing.len(),
        total,
        opts.min_rating,
        opts.min_rating_count
    );

    let mut rows = Vec::new();
    for app in passing {
        if let Some(row) = scan_app(reviews, app, opts).await? {
            log::debug!(
                "{} matched {} review(s)",
                row.app.name,
                row.matched_count
            );
            rows.push(row);
        }
    }

    rank(&mut rows);
    Ok(rows)
}

/// Single-app variant of [`discover`], keyed by bundle identifier.
///
/// Returns zero or one rows. The threshold check runs before any review
/// request, so no feed traffic is spent on a failing app.
pub async fn lookup_candidate(
    catalog: &CatalogClient,
    reviews: &ReviewFetcher,
    bundle_id: &str,
    opts: &DiscoverOptions,
) -> Result<Vec<CandidateRow>> {
    let Some(app) = catalog.lookup_by_bundle_id(bundle_id, &opts.country).await? else {
        log::info!("No software entry found for bundle id '{}'", bundle_id);
        return Ok(Vec::new());
    };

    if !passes_thresholds(&app, opts) {
        log::info!(
            "{} is below thresholds ({} stars, {} ratings), skipping reviews",
            app.name,
            app.average_rating,
            app.rating_count
        );
        return Ok(Vec::new());
    }

    Ok(scan_app(reviews, app, opts).await?.into_iter().collect())
}

fn passes_thresholds(app: &App, opts: &DiscoverOptions) -> bool {
    app.average_rating >= opts.min_rating && app.rating_count >= opts.min_rating_count
}

/// Fetch and scan one app's reviews, producing a row when at least one
/// review matches the phrase rule.
async fn scan_app(
    reviews: &ReviewFetcher,
    app: App,
    opts: &DiscoverOptions,
) -> Result<Option<CandidateRow>> {
    let fetched = reviews
        .fetch_reviews(app.app_id, &opts.country, opts.max_review_pages)
        .await?;

    let mut matched_count = 0;
    let mut examples = Vec::new();

    for review in &fetched {
        let text = format!("{}\n{}", review.title, review.content);
        let m = match_phrases(&text, &opts.phrases_any, &opts.phrases_all);

        // `ok` already folds in the OR condition; the second clause is
        // the documented matching contract and is kept as written.
        if m.ok && (opts.phrases_any.is_empty() || !m.matched_any.is_empty()) {
            matched_count += 1;
            if examples.len() < MAX_EXAMPLES {
                examples.push(MatchedExample {
                    matched_any: m
                        .matched_any
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", "),
                    rating: review.rating,
                    snippet: build_snippet(review),
                    updated: review.updated.clone(),
                });
            }
        }
    }

    if matched_count == 0 {
        return Ok(None);
    }

    Ok(Some(CandidateRow {
        app,
        matched_count,
        examples,
    }))
}

/// Build a reporting snippet from a matched review.
///
/// Prefers the content body, falling back to the title when the body is
/// empty. Newlines collapse to single spaces; anything longer than 180
/// characters is cut to 177 plus an ellipsis.
fn build_snippet(review: &Review) -> String {
    let source = if review.content.is_empty() {
        &review.title
    } else {
        &review.content
    };
    let snippet = source.trim().replace('\n', " ");

    if snippet.chars().count() > SNIPPET_MAX_CHARS {
        let head: String = snippet.chars().take(SNIPPET_MAX_CHARS - 3).collect();
        format!("{head}...")
    } else {
        snippet
    }
}

/// Sort rows descending by `(matched_count, rating_count)`, stable ties.
fn rank(rows: &mut [CandidateRow]) {
    rows.sort_by(|a, b| {
        b.matched_count
            .cmp(&a.matched_count)
            .then(b.app.rating_count.cmp(&a.app.rating_count))
    });
}
