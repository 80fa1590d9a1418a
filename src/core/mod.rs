//! Core fetch, parse, and grouping infrastructure.

pub mod fetcher;
pub mod grouping;
pub mod http;
pub mod logging;
pub mod models;
pub mod pipeline;

pub use fetcher::{FetchOutcome, Fetcher, MAX_RETRIES};
pub use grouping::{ProjectedItem, group_by_category, to_json};
pub use models::{Item, Rating, parse_items};
