//! Execution-sandbox collaborator for the playground tab.
//!
//! The sandbox accepts an input payload for a listing and asynchronously
//! returns a run report. The demo implementation fabricates the report
//! after a 1-3 second delay, mirroring what the real backend returns.

use futures::future::BoxFuture;
use rand::Rng;
use serde::Serialize;

use crate::constants::COST_PER_TOKEN_USD;
use crate::models::AgentListing;

/// Canned payload used when the playground input is empty.
pub const SAMPLE_INPUT: &str = r#"{ "query": "sample data", "parameters": { "limit": 10 } }"#;

#[derive(Debug, Clone, Serialize)]
pub struct RunData {
    pub processed: bool,
    pub result: String,
    pub timestamp: String,
    pub confidence: f64,
    pub processing_time_ms: u64,
    pub tokens_used: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub model_version: &'static str,
    pub category: String,
    pub developer: String,
}

/// Report produced by a sandbox run.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    pub status: &'static str,
    pub agent_id: u32,
    pub data: RunData,
    pub metadata: RunMetadata,
}

impl RunOutput {
    /// Cost derived from token usage, in USD.
    pub fn cost_usd(&self) -> f64 {
        self.data.tokens_used as f64 * COST_PER_TOKEN_USD
    }
}

/// External sandbox collaborator. The shell only tracks running vs idle
/// around it and renders whatever report comes back.
pub trait ExecutionSandbox: Send + Sync {
    fn run(&self, listing: &AgentListing, input: String) -> BoxFuture<'static, RunOutput>;
}

/// Demo sandbox: sleeps 1-3 seconds, then reports success with randomized
/// processing time and token usage. The input payload is accepted as-is;
/// the demo backend does not interpret it.
pub struct DemoSandbox;

impl ExecutionSandbox for DemoSandbox {
    fn run(&self, listing: &AgentListing, _input: String) -> BoxFuture<'static, RunOutput> {
        let agent_id = listing.id;
        let name = listing.name.clone();
        let category = listing.category.clone();
        let developer = listing.developer.clone();

        let mut rng = rand::thread_rng();
        let delay_ms: u64 = rng.gen_range(1000..3000);
        let processing_time_ms: u64 = rng.gen_range(100..600);
        let tokens_used: u64 = rng.gen_range(500..1500);

        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
            RunOutput {
                status: "success",
                agent_id,
                data: RunData {
                    processed: true,
                    result: format!("{name} processed your request successfully"),
                    timestamp: chrono::Utc::now().to_rfc3339(),
                    confidence: 0.98,
                    processing_time_ms,
                    tokens_used,
                },
                metadata: RunMetadata {
                    model_version: "2.1.0",
                    category,
                    developer,
                },
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> AgentListing {
        AgentListing {
            id: 3,
            name: "CopyForge".into(),
            developer: "Inkwell AI".into(),
            category: "Content".into(),
            jobs: 7431,
            success_rate: 93.8,
            price: "0.3 ALGO/task".into(),
            created_at: 0,
            featured: false,
            trending: true,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_run_reports_success_for_listing() {
        let output = DemoSandbox.run(&listing(), SAMPLE_INPUT.to_string()).await;
        assert_eq!(output.status, "success");
        assert_eq!(output.agent_id, 3);
        assert!(output.data.processed);
        assert!(output.data.result.contains("CopyForge"));
        assert_eq!(output.metadata.category, "Content");
        assert!((100..600).contains(&output.data.processing_time_ms));
        assert!((500..1500).contains(&output.data.tokens_used));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cost_follows_token_usage() {
        let output = DemoSandbox.run(&listing(), String::new()).await;
        let expected = output.data.tokens_used as f64 * COST_PER_TOKEN_USD;
        assert!((output.cost_usd() - expected).abs() < f64::EPSILON);
        assert!(output.cost_usd() >= 0.05 && output.cost_usd() < 0.15);
    }

    #[test]
    fn test_sample_input_is_valid_json() {
        assert!(serde_json::from_str::<serde_json::Value>(SAMPLE_INPUT).is_ok());
    }
}
