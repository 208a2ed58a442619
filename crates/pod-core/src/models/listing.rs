use serde::{Deserialize, Serialize};

/// A single agent listing in the marketplace catalog.
///
/// Listings are immutable once the catalog is built; the browser only ever
/// filters and reorders them. `id` uniquely identifies a listing within its
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentListing {
    pub id: u32,
    pub name: String,
    pub developer: String,
    pub category: String,
    /// Completed jobs, lifetime.
    pub jobs: u64,
    /// Percentage in 0..=100.
    pub success_rate: f64,
    /// Display-formatted price, e.g. "0.5 ALGO/task". Not numeric on purpose.
    pub price: String,
    /// Unix seconds when the listing was published.
    pub created_at: u64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub trending: bool,
}

impl AgentListing {
    /// Short preview of the developer line shown in compact list rows.
    pub fn byline(&self) -> String {
        format!("by {}", self.developer)
    }
}
