//! The read-only listing catalog.
//!
//! A catalog is built once at startup, either from the built-in demo
//! listings or from a JSON file, and never mutated afterwards. The browser
//! derives every visible view from it with [`crate::query::compute_view`].

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::constants;
use crate::models::AgentListing;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate listing id {0}")]
    DuplicateId(u32),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<AgentListing>,
}

impl Catalog {
    /// Build a catalog from listings, enforcing id uniqueness.
    pub fn new(listings: Vec<AgentListing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id) {
                return Err(CatalogError::DuplicateId(listing.id));
            }
            // Unknown categories are kept: they only cost the listing its
            // sidebar entry, they never break the browser.
            if !constants::is_known_category(&listing.category) {
                tracing::warn!(
                    id = listing.id,
                    category = %listing.category,
                    "listing category is outside the known set"
                );
            }
        }
        Ok(Self { listings })
    }

    /// The built-in demo listings the marketplace ships with.
    pub fn builtin() -> Self {
        Self {
            listings: seed_listings(),
        }
    }

    /// Load listings from a JSON file (an array of listing objects).
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let listings: Vec<AgentListing> = serde_json::from_str(&raw)?;
        Self::new(listings)
    }

    pub fn listings(&self) -> &[AgentListing] {
        &self.listings
    }

    pub fn get(&self, id: u32) -> Option<&AgentListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u32,
    name: &str,
    developer: &str,
    category: &str,
    jobs: u64,
    success_rate: f64,
    price: &str,
    created_at: u64,
    featured: bool,
    trending: bool,
) -> AgentListing {
    AgentListing {
        id,
        name: name.into(),
        developer: developer.into(),
        category: category.into(),
        jobs,
        success_rate,
        price: price.into(),
        created_at,
        featured,
        trending,
    }
}

// Timestamps are unix seconds across August..October 2025, matching the
// marketplace's demo launch window.
fn seed_listings() -> Vec<AgentListing> {
    vec![
        seed(1, "DataMind Pro", "Quantlabs", "Data", 12840, 98.2, "0.5 ALGO/task", 1_759_708_800, true, true),
        seed(2, "TradeSage", "Helios Systems", "Trading", 9672, 96.4, "1.2 ALGO/task", 1_758_844_800, true, false),
        seed(3, "CopyForge", "Inkwell AI", "Content", 7431, 93.8, "0.3 ALGO/task", 1_757_376_000, false, true),
        seed(4, "ChainAuditor", "Verity", "Specialized", 5210, 99.1, "2.0 ALGO/task", 1_756_080_000, true, false),
        seed(5, "BugSweep", "Nullframe", "Development", 4388, 91.5, "0.8 ALGO/task", 1_758_326_400, false, false),
        seed(6, "InsightLoop", "Graphika", "Analytics", 6120, 95.0, "0.6 ALGO/task", 1_759_190_400, false, true),
        seed(7, "LedgerScribe", "Quantlabs", "Data", 3015, 89.7, "0.4 ALGO/task", 1_755_302_400, false, false),
        seed(8, "ArbPilot", "Helios Systems", "Trading", 8903, 97.3, "1.5 ALGO/task", 1_760_054_400, true, true),
        seed(9, "ThreadSmith", "Inkwell AI", "Content", 2644, 92.1, "0.2 ALGO/task", 1_754_006_400, false, false),
        seed(10, "OracleRelay", "Verity", "Specialized", 4777, 96.8, "1.8 ALGO/task", 1_757_894_400, false, false),
        seed(11, "PipelineZero", "Nullframe", "Development", 5562, 94.4, "0.7 ALGO/task", 1_759_536_000, true, false),
        seed(12, "TrendLens", "Graphika", "Analytics", 7218, 90.9, "0.5 ALGO/task", 1_756_684_800, false, true),
    ]
}
