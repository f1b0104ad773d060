// src/export.rs

//! CSV export of candidate rows.
//!
//! The output always carries a header; with zero rows the file is
//! header-only. Genre lists flatten to a comma-joined string and the
//! examples column holds compact JSON.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::CandidateRow;

/// Column order of the exported CSV.
pub const CSV_HEADERS: [&str; 13] = [
    "app_id",
    "name",
    "bundle_id",
    "seller_name",
    "url",
    "average_rating",
    "rating_count",
    "price",
    "currency",
    "primary_genre",
    "genres",
    "matched_count",
    "examples",
];

/// Write candidate rows to a CSV file at `path`.
pub fn write_csv(rows: &[CandidateRow], path: impl AsRef<Path>) -> Result<()> {
    let mut out = String::new();
    out.push_str(&CSV_HEADERS.join(","));
    out.push('\n');

    for row in rows {
        let fields = [
            row.app.app_id.to_string(),
            row.app.name.clone(),
            row.app.bundle_id.clone(),
            row.app.seller_name.clone(),
            row.app.url.clone(),
            row.app.average_rating.to_string(),
            row.app.rating_count.to_string(),
            row.app.price.to_string(),
            row.app.currency.clone(),
            row.app.primary_genre.clone(),
            row.app.genres.join(", "),
            row.matched_count.to_string(),
            serde_json::to_string(&row.examples)?,
        ];

        let escaped: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }

    fs::write(path, out)?;
    Ok(())
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
