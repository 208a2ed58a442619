mod clipboard;
mod input;
mod render;
mod runtime;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use pod_core::config::CoreConfig;
use pod_core::sandbox::DemoSandbox;
use pod_core::tracing_setup::init_tracing;
use pod_core::wallet::DemoWallet;
use pod_core::{Catalog, WalletSession};

use crate::runtime::run_app;
use crate::ui::{App, RunEvent};

/// Terminal browser for the 0rca Pod agent marketplace.
#[derive(Parser, Debug)]
#[command(name = "pod-tui", version, about)]
struct Args {
    /// JSON listings file to browse instead of the built-in catalog.
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,

    /// Start with a quick filter applied (featured, newest, trending,
    /// top-rated, verified, specialized).
    #[arg(long)]
    filter: Option<String>,

    /// Start with a sort order (featured, newest, popular, rating).
    #[arg(long)]
    sort: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Restore the terminal before the panic message hits the screen.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    init_tracing()?;

    let args = Args::parse();
    let config = CoreConfig {
        catalog_path: args.catalog,
        ..Default::default()
    };

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    tracing::info!(listings = catalog.len(), "catalog loaded");

    let (session_tx, session_rx) = tokio::sync::mpsc::unbounded_channel();
    let (run_tx, run_rx) = tokio::sync::mpsc::unbounded_channel::<RunEvent>();

    let wallet = Arc::new(DemoWallet::new(&config.wallet));
    let session = WalletSession::new(wallet, session_tx);
    let mut app = App::new(catalog, session, Arc::new(DemoSandbox), run_tx);

    // Unrecognized ids fall through to the pass-through defaults.
    if let Some(id) = args.filter.as_deref() {
        match pod_core::QuickFilter::parse(id) {
            Some(filter) => app.set_quick_filter(Some(filter)),
            None => tracing::warn!(id, "ignoring unknown quick filter"),
        }
    }
    if let Some(id) = args.sort.as_deref() {
        match pod_core::SortKey::parse(id) {
            Some(sort) => app.set_sort(sort),
            None => tracing::warn!(id, "ignoring unknown sort key"),
        }
    }

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, session_rx, run_rx).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
