//! Category grouping and price-sorted projection.

use std::collections::BTreeMap;

use serde::Serialize;

use super::models::Item;
use crate::error::Result;

/// The per-item projection written to the output document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectedItem {
    pub id: u64,
    pub title: String,
    pub price: f64,
}

impl From<Item> for ProjectedItem {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            price: item.price,
        }
    }
}

/// Group items by category, each group sorted by price ascending.
///
/// A `BTreeMap` keeps the category order deterministic. Price ties keep
/// input order.
#[must_use]
pub fn group_by_category(items: Vec<Item>) -> BTreeMap<String, Vec<ProjectedItem>> {
    let mut grouped: BTreeMap<String, Vec<ProjectedItem>> = BTreeMap::new();
    for item in items {
        grouped
            .entry(item.category.clone())
            .or_default()
            .push(item.into());
    }
    for group in grouped.values_mut() {
        group.sort_by(|a, b| a.price.total_cmp(&b.price));
    }
    grouped
}

/// Serialize the grouped projection. Pretty (indented) unless `compact`.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn to_json(grouped: &BTreeMap<String, Vec<ProjectedItem>>, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(grouped)?
    } else {
        serde_json::to_string_pretty(grouped)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, title: &str, price: f64, category: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            price,
            description: None,
            category: category.to_string(),
            image: None,
            rating: None,
        }
    }

    #[test]
    fn groups_by_category() {
        let grouped = group_by_category(vec![
            item(1, "A", 9.5, "x"),
            item(2, "B", 3.0, "y"),
            item(3, "C", 1.0, "x"),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["x"].len(), 2);
        assert_eq!(grouped["y"].len(), 1);
    }

    #[test]
    fn groups_sorted_by_price_ascending() {
        let grouped = group_by_category(vec![
            item(1, "Pricey", 99.0, "x"),
            item(2, "Cheap", 0.5, "x"),
            item(3, "Mid", 10.0, "x"),
        ]);

        let prices: Vec<f64> = grouped["x"].iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![0.5, 10.0, 99.0]);
    }

    #[test]
    fn price_ties_keep_input_order() {
        let grouped = group_by_category(vec![
            item(1, "First", 5.0, "x"),
            item(2, "Second", 5.0, "x"),
        ]);

        let ids: Vec<u64> = grouped["x"].iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn projection_drops_extra_fields() {
        let mut source = item(1, "A", 9.5, "x");
        source.description = Some("long text".to_string());
        source.image = Some("https://example.com/a.jpg".to_string());

        let grouped = group_by_category(vec![source]);
        let json = to_json(&grouped, true).unwrap();
        assert_eq!(json, r#"{"x":[{"id":1,"title":"A","price":9.5}]}"#);
    }

    #[test]
    fn empty_input_serializes_to_empty_object() {
        let grouped = group_by_category(Vec::new());
        assert_eq!(to_json(&grouped, true).unwrap(), "{}");
    }
}
