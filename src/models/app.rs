// src/models/app.rs

//! App catalog entry data structure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An application as returned by the catalog directory.
///
/// Identity is `app_id`; all other fields are directory-authoritative
/// metadata carried through to the exported candidate rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct App {
    /// Unique track identifier (dedup key)
    pub app_id: u64,

    /// Display name
    pub name: String,

    /// Bundle/package identifier
    pub bundle_id: String,

    /// Seller (developer) name
    pub seller_name: String,

    /// Storefront URL
    pub url: String,

    /// Average star rating (0.0 when the directory omits it)
    pub average_rating: f64,

    /// Number of ratings (0 when the directory omits it)
    pub rating_count: u64,

    /// Price in storefront currency
    pub price: f64,

    /// Currency code
    pub currency: String,

    /// Primary genre name
    pub primary_genre: String,

    /// All genre names, in directory order
    pub genres: Vec<String>,
}

impl App {
    /// Build an `App` from one raw catalog result entry.
    ///
    /// Returns `None` for non-software entries and entries without a
    /// usable (non-zero) track id. Missing numeric fields default to
    /// 0/0.0; the "current" rating fields are preferred over the
    /// version-specific fallbacks.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        if entry.get("kind").and_then(Value::as_str) != Some("software") {
            return None;
        }
        let app_id = entry.get("trackId").and_then(Value::as_u64).filter(|&id| id != 0)?;

        Some(Self {
            app_id,
            name: str_field(entry, "trackName"),
            bundle_id: str_field(entry, "bundleId"),
            seller_name: str_field(entry, "sellerName"),
            url: str_field(entry, "trackViewUrl"),
            average_rating: float_field(entry, "averageUserRating")
                .or_else(|| float_field(entry, "averageUserRatingForCurrentVersion"))
                .unwrap_or(0.0),
            rating_count: uint_field(entry, "userRatingCount")
                .or_else(|| uint_field(entry, "userRatingCountForCurrentVersion"))
                .unwrap_or(0),
            price: float_field(entry, "price").unwrap_or(0.0),
            currency: entry
                .get("currency")
                .and_then(Value::as_str)
                .unwrap_or("USD")
                .to_string(),
            primary_genre: str_field(entry, "primaryGenreName"),
            genres: entry
                .get("genres")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

fn str_field(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn float_field(entry: &Value, key: &str) -> Option<f64> {
    entry.get(key).and_then(Value::as_f64)
}

fn uint_field(entry: &Value, key: &str) -> Option<u64> {
    entry.get(key).and_then(Value::as_u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_entry_full() {
        let entry = json!({
            "kind": "software",
            "trackId": 123,
            "trackName": "Budget Planner",
            "bundleId": "com.example.budget",
            "sellerName": "Example Inc.",
            "trackViewUrl": "https://apps.example.com/app/123",
            "averageUserRating": 4.7,
            "userRatingCount": 500,
            "price": 1.99,
            "currency": "EUR",
            "primaryGenreName": "Finance",
            "genres": ["Finance", "Productivity"]
        });

        let app = App::from_entry(&entry).unwrap();
        assert_eq!(app.app_id, 123);
        assert_eq!(app.name, "Budget Planner");
        assert_eq!(app.average_rating, 4.7);
        assert_eq!(app.rating_count, 500);
        assert_eq!(app.currency, "EUR");
        assert_eq!(app.genres, vec!["Finance", "Productivity"]);
    }

    #[test]
    fn test_from_entry_defaults() {
        let entry = json!({ "kind": "software", "trackId": 7 });
        let app = App::from_entry(&entry).unwrap();
        assert_eq!(app.name, "");
        assert_eq!(app.average_rating, 0.0);
        assert_eq!(app.rating_count, 0);
        assert_eq!(app.price, 0.0);
        assert_eq!(app.currency, "USD");
        assert!(app.genres.is_empty());
    }

    #[test]
    fn test_from_entry_rating_fallback() {
        let entry = json!({
            "kind": "software",
            "trackId": 7,
            "averageUserRatingForCurrentVersion": 4.1,
            "userRatingCountForCurrentVersion": 42
        });
        let app = App::from_entry(&entry).unwrap();
        assert_eq!(app.average_rating, 4.1);
        assert_eq!(app.rating_count, 42);
    }

    #[test]
    fn test_from_entry_rejects_non_software() {
        let entry = json!({ "kind": "podcast", "trackId": 9 });
        assert!(App::from_entry(&entry).is_none());
    }

    #[test]
    fn test_from_entry_rejects_missing_id() {
        assert!(App::from_entry(&json!({ "kind": "software" })).is_none());
        assert!(App::from_entry(&json!({ "kind": "software", "trackId": 0 })).is_none());
    }
}
