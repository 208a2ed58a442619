//! Marketplace-wide constants shared between the core and the TUI.

/// Success rate (percent) a listing needs to count as verified.
pub const VERIFIED_SUCCESS_RATE: f64 = 95.0;

/// Category matched by the "Specialized" quick filter.
pub const SPECIALIZED_CATEGORY: &str = "Specialized";

/// Closed category set offered by the sidebar.
pub const CATEGORIES: &[&str] = &[
    "Data",
    "Trading",
    "Content",
    "Development",
    "Analytics",
    "Specialized",
];

/// Address handed out by the demo wallet provider.
pub const DEMO_WALLET_ADDRESS: &str = "ABCD1234567890WXYZ1234567890ABCD1234567890WXYZ";

/// Simulated session-establishment delay for the demo wallet.
pub const DEMO_CONNECT_DELAY_MS: u64 = 1000;

/// Per-token price used to derive the playground cost readout.
pub const COST_PER_TOKEN_USD: f64 = 0.0001;

pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}
