use std::path::PathBuf;

use crate::constants;

/// Wallet-collaborator settings for the demo provider.
#[derive(Debug, Clone)]
pub struct WalletConfig {
    pub address: String,
    pub connect_delay_ms: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            address: constants::DEMO_WALLET_ADDRESS.to_string(),
            connect_delay_ms: constants::DEMO_CONNECT_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    /// Optional JSON listings file; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub wallet: WalletConfig,
}
