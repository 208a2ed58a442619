//! Wallet-provider integration boundary.
//!
//! The browser only needs one thing from a wallet: an async
//! session-establishment call that yields an address or fails. The demo
//! provider stands in for a real integration and resolves to a fixed
//! address after a short delay.

use std::time::Duration;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::config::WalletConfig;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("wallet rejected the connection request")]
    Rejected,
    #[error("wallet connection timed out")]
    Timeout,
    #[error("wallet provider failure: {0}")]
    Provider(String),
}

/// External wallet collaborator. Implementations perform the actual
/// session establishment; the session state machine never blocks on them
/// directly, it spawns them and waits for the result on a channel.
pub trait WalletProvider: Send + Sync {
    fn establish_session(&self) -> BoxFuture<'static, Result<String, WalletError>>;
}

/// Demo provider: waits out the configured delay, then yields the
/// configured address. Never fails.
pub struct DemoWallet {
    address: String,
    delay: Duration,
}

impl DemoWallet {
    pub fn new(config: &WalletConfig) -> Self {
        Self {
            address: config.address.clone(),
            delay: Duration::from_millis(config.connect_delay_ms),
        }
    }
}

impl WalletProvider for DemoWallet {
    fn establish_session(&self) -> BoxFuture<'static, Result<String, WalletError>> {
        let address = self.address.clone();
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(address)
        })
    }
}
