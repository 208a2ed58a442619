//! Static content backing the detail view's Analytics, Reviews and
//! Versions tabs. The marketplace demo ships the same data for every
//! listing; a real deployment would fetch these per listing.

/// One day of on-chain performance history.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsPoint {
    pub day: u32,
    pub uptime: f64,
    pub response_time_ms: u64,
    pub transactions: u64,
}

/// A verified review left by a wallet.
#[derive(Debug, Clone)]
pub struct Review {
    pub wallet: &'static str,
    /// Stars, 1..=5.
    pub rating: u8,
    pub text: &'static str,
    pub verified: bool,
}

/// An entry in the version-history timeline.
#[derive(Debug, Clone)]
pub struct VersionEntry {
    pub version: &'static str,
    pub date: &'static str,
    pub changes: &'static [&'static str],
}

pub fn analytics_series() -> Vec<AnalyticsPoint> {
    vec![
        AnalyticsPoint { day: 1, uptime: 99.9, response_time_ms: 120, transactions: 450 },
        AnalyticsPoint { day: 5, uptime: 99.8, response_time_ms: 115, transactions: 520 },
        AnalyticsPoint { day: 10, uptime: 99.9, response_time_ms: 110, transactions: 580 },
        AnalyticsPoint { day: 15, uptime: 100.0, response_time_ms: 105, transactions: 640 },
        AnalyticsPoint { day: 20, uptime: 99.7, response_time_ms: 118, transactions: 710 },
        AnalyticsPoint { day: 25, uptime: 99.9, response_time_ms: 108, transactions: 780 },
        AnalyticsPoint { day: 30, uptime: 100.0, response_time_ms: 102, transactions: 850 },
    ]
}

pub fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            wallet: "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb",
            rating: 5,
            text: "Absolutely incredible performance. This agent has processed over \
                   10,000 data points for me with zero errors. Highly recommend!",
            verified: true,
        },
        Review {
            wallet: "0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063",
            rating: 5,
            text: "Lightning fast response times and accurate results every time. \
                   Worth every penny.",
            verified: true,
        },
        Review {
            wallet: "0x123d35Cc6634C0532925a3b844Bc9e7595f0abc",
            rating: 4,
            text: "Great agent overall. Had one minor issue with complex queries but \
                   support was responsive.",
            verified: true,
        },
    ]
}

pub fn version_history() -> Vec<VersionEntry> {
    vec![
        VersionEntry {
            version: "v2.1.0",
            date: "2025-10-10",
            changes: &[
                "Improved response time by 15%",
                "Added support for batch processing",
                "Fixed memory leak in long-running tasks",
                "Enhanced error handling and reporting",
            ],
        },
        VersionEntry {
            version: "v2.0.0",
            date: "2025-09-22",
            changes: &[
                "Major architecture overhaul",
                "Implemented caching layer",
                "Added real-time progress tracking",
                "Reduced operational costs by 20%",
            ],
        },
        VersionEntry {
            version: "v1.8.5",
            date: "2025-09-05",
            changes: &[
                "Security patch for authentication",
                "Minor UI improvements",
                "Updated dependencies",
            ],
        },
    ]
}
