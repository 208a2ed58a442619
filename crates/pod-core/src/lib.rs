pub mod catalog;
pub mod config;
pub mod constants;
pub mod models;
pub mod query;
pub mod sandbox;
pub mod search;
pub mod session;
pub mod stats;
pub mod tracing_setup;
pub mod wallet;

pub use catalog::Catalog;
pub use models::{AgentListing, QueryDescriptor, QuickFilter, SortKey};
pub use session::{SessionEvent, SessionState, WalletSession};
