//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Directory holding the stored JSON documents.
    pub storage_dir: String,
    /// Directory with the bundled places, trips, diary and moments data.
    pub fixtures_dir: String,
    /// Page size used by listings when the request does not set one.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}
