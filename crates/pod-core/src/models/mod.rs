pub mod detail;
pub mod listing;
pub mod query;

pub use detail::{AnalyticsPoint, Review, VersionEntry};
pub use listing::AgentListing;
pub use query::{QueryDescriptor, QuickFilter, SortKey};
