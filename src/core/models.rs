//! Catalog item model.
//!
//! Mirrors the upstream catalog's JSON shape. Parsing is fail-soft: an
//! unparseable payload is logged and treated as an empty catalog.

use serde::{Deserialize, Serialize};

/// Aggregate customer rating attached to an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// One product catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Grouping key. Items without a category land in the "" group.
    #[serde(default)]
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Parse a JSON array of catalog items. On parse failure, logs the error and
/// returns an empty vec.
#[must_use]
pub fn parse_items(content: &str) -> Vec<Item> {
    match serde_json::from_str::<Vec<Item>>(content) {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(error = %e, "failed to parse catalog json");
            Vec::new()
        }
    }
}
