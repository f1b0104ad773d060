// src/services/catalog.rs

//! Catalog client service.
//!
//! Wraps the transport to perform term search and bundle-id lookup
//! against the iTunes app directory, normalizing raw entries into
//! [`App`] records.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::models::App;
use crate::utils::http::Transport;

/// Search endpoint of the app directory.
pub const SEARCH_URL: &str = "https://itunes.apple.com/search";

/// Lookup-by-identifier endpoint of the app directory.
pub const LOOKUP_URL: &str = "https://itunes.apple.com/lookup";

/// Default number of results requested per search term.
pub const DEFAULT_LIMIT_PER_TERM: u32 = 50;

/// Service for searching and looking up apps in the catalog.
pub struct CatalogClient {
    transport: Arc<dyn Transport>,
}

impl CatalogClient {
    /// Create a new catalog client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Search the catalog for every non-blank term, deduplicated by app id.
    ///
    /// An app matched by several terms appears once; later occurrences
    /// overwrite earlier ones, which is harmless because catalog fields
    /// do not depend on the search term. The returned order is the map's
    /// iteration order, not guaranteed stable across terms.
    pub async fn search_by_terms(
        &self,
        terms: &[String],
        country: &str,
        limit_per_term: u32,
    ) -> Result<Vec<App>> {
        let limit = limit_per_term.to_string();
        let mut found: HashMap<u64, App> = HashMap::new();

        for raw_term in terms {
            let term = raw_term.trim();
            if term.is_empty() {
                continue;
            }

            let params = [
                ("term", term),
                ("country", country),
                ("entity", "software"),
                ("limit", limit.as_str()),
            ];
            let data = self.transport.get_json(SEARCH_URL, &params).await?;

            for entry in result_entries(&data) {
                if let Some(app) = App::from_entry(entry) {
                    found.insert(app.app_id, app);
                }
            }

            log::debug!("Term '{}' processed, {} unique apps so far", term, found.len());
        }

        Ok(found.into_values().collect())
    }

    /// Look up a single app by bundle identifier.
    ///
    /// Returns the first software-kind result, or `None` if the catalog
    /// has no match.
    pub async fn lookup_by_bundle_id(
        &self,
        bundle_id: &str,
        country: &str,
    ) -> Result<Option<App>> {
        let params = [("bundleId", bundle_id), ("country", country)];
        let data = self.transport.get_json(LOOKUP_URL, &params).await?;

        Ok(result_entries(&data).iter().find_map(|e| App::from_entry(e)))
    }
}

/// The `results` list of a catalog response, empty when absent.
fn result_entries(data: &Value) -> &[Value] {
    data.get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
