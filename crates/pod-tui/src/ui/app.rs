use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;

use pod_core::constants::CATEGORIES;
use pod_core::query::compute_view;
use pod_core::sandbox::{ExecutionSandbox, RunOutput, SAMPLE_INPUT};
use pod_core::stats::{MarketStats, DRIFT_INTERVAL_SECS};
use pod_core::{AgentListing, Catalog, QueryDescriptor, QuickFilter, SortKey, WalletSession};

use crate::ui::notifications::{Notification, NotificationQueue};

/// Event-loop tick cadence, shared with the runtime.
pub const TICK_MILLIS: u64 = 50;
const DRIFT_TICKS: u64 = DRIFT_INTERVAL_SECS * 1000 / TICK_MILLIS;

/// Cards per row in grid layout.
pub const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Browser,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the header search box.
    Search,
    /// Typing into the playground input pane.
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Grid,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Playground,
    Analytics,
    Reviews,
    Versions,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        Self::Playground,
        Self::Analytics,
        Self::Reviews,
        Self::Versions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Playground => "Playground",
            Self::Analytics => "Analytics",
            Self::Reviews => "Reviews",
            Self::Versions => "Versions",
        }
    }

    pub fn cycle_next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Completed sandbox run, delivered back through the event loop.
#[derive(Debug)]
pub struct RunEvent {
    pub token: u64,
    pub listing_id: u32,
    pub output: RunOutput,
}

/// Playground tab state for the listing currently open in the detail view.
#[derive(Debug, Default)]
pub struct PlaygroundState {
    pub input: String,
    pub output: Option<String>,
    pub running: bool,
    pub started_at: Option<Instant>,
    pub execution_time_ms: Option<u64>,
    pub cost_usd: Option<f64>,
}

impl PlaygroundState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct App {
    pub running: bool,
    pub pending_quit: bool,
    pub view: View,
    pub input_mode: InputMode,
    pub layout: LayoutMode,
    pub sidebar_open: bool,

    pub descriptor: QueryDescriptor,
    catalog: Catalog,
    /// Derived view for the current descriptor, recomputed on every
    /// descriptor change. Descriptor changes are serialized by the event
    /// loop, so the cache can never race a stale recomputation.
    view_cache: Vec<AgentListing>,
    pub selected: usize,

    pub viewing_id: Option<u32>,
    pub detail_tab: DetailTab,
    pub playground: PlaygroundState,
    pub scroll_offset: usize,

    pub session: WalletSession,
    pub stats: MarketStats,
    pub notifications: NotificationQueue,

    sandbox: Arc<dyn ExecutionSandbox>,
    run_tx: UnboundedSender<RunEvent>,
    run_token: u64,
    frame: u64,
}

impl App {
    pub fn new(
        catalog: Catalog,
        session: WalletSession,
        sandbox: Arc<dyn ExecutionSandbox>,
        run_tx: UnboundedSender<RunEvent>,
    ) -> Self {
        let descriptor = QueryDescriptor::unfiltered();
        let view_cache = compute_view(catalog.listings(), &descriptor);
        Self {
            running: true,
            pending_quit: false,
            view: View::Browser,
            input_mode: InputMode::Normal,
            layout: LayoutMode::Grid,
            sidebar_open: true,
            descriptor,
            catalog,
            view_cache,
            selected: 0,
            viewing_id: None,
            detail_tab: DetailTab::Playground,
            playground: PlaygroundState::default(),
            scroll_offset: 0,
            session,
            stats: MarketStats::default(),
            notifications: NotificationQueue::new(),
            sandbox,
            run_tx,
            run_token: 0,
            frame: 0,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Frame tick: expire toasts and drift the stats bar on its cadence.
    pub fn tick(&mut self) {
        self.frame += 1;
        self.notifications.tick();
        if self.frame % DRIFT_TICKS == 0 {
            self.stats.drift(&mut rand::thread_rng());
        }
    }

    // ===== Derived view =====

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Listings selected by the current descriptor, in display order.
    pub fn visible_listings(&self) -> &[AgentListing] {
        &self.view_cache
    }

    pub fn selected_listing(&self) -> Option<&AgentListing> {
        self.view_cache.get(self.selected)
    }

    fn refresh_view(&mut self) {
        self.view_cache = compute_view(self.catalog.listings(), &self.descriptor);
        if self.selected >= self.view_cache.len() {
            self.selected = self.view_cache.len().saturating_sub(1);
        }
    }

    // ===== Descriptor edits (each one supersedes the cached view) =====

    pub fn push_search_char(&mut self, c: char) {
        self.descriptor.search.push(c);
        self.refresh_view();
    }

    pub fn pop_search_char(&mut self) {
        self.descriptor.search.pop();
        self.refresh_view();
    }

    pub fn clear_search(&mut self) {
        self.descriptor.search.clear();
        self.refresh_view();
    }

    pub fn cycle_quick_filter(&mut self) {
        self.descriptor.quick_filter = QuickFilter::cycle_next(self.descriptor.quick_filter);
        self.refresh_view();
    }

    pub fn set_quick_filter(&mut self, filter: Option<QuickFilter>) {
        self.descriptor.quick_filter = filter;
        self.refresh_view();
    }

    pub fn cycle_category(&mut self) {
        self.descriptor.category = match self.descriptor.category.as_deref() {
            None => Some(CATEGORIES[0].to_string()),
            Some(current) => CATEGORIES
                .iter()
                .position(|c| *c == current)
                .and_then(|idx| CATEGORIES.get(idx + 1))
                .map(|c| (*c).to_string()),
        };
        self.refresh_view();
    }

    pub fn cycle_sort(&mut self) {
        self.set_sort(self.descriptor.sort.cycle_next());
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.descriptor.sort = sort;
        self.refresh_view();
    }

    pub fn toggle_layout(&mut self) {
        self.layout = match self.layout {
            LayoutMode::Grid => LayoutMode::List,
            LayoutMode::List => LayoutMode::Grid,
        };
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    // ===== Selection =====

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    /// Vertical movement in grid layout jumps a whole row.
    pub fn select_row_down(&mut self) {
        match self.layout {
            LayoutMode::Grid => self.move_selection(GRID_COLUMNS as isize),
            LayoutMode::List => self.move_selection(1),
        }
    }

    pub fn select_row_up(&mut self) {
        match self.layout {
            LayoutMode::Grid => self.move_selection(-(GRID_COLUMNS as isize)),
            LayoutMode::List => self.move_selection(-1),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.view_cache.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.view_cache.len() - 1;
        let next = self.selected.saturating_add_signed(delta);
        self.selected = next.min(last);
    }

    // ===== Detail view =====

    pub fn open_detail(&mut self) {
        let Some(listing) = self.selected_listing() else {
            return;
        };
        self.viewing_id = Some(listing.id);
        self.view = View::Detail;
        self.detail_tab = DetailTab::Playground;
        self.playground.clear();
        self.scroll_offset = 0;
        self.input_mode = InputMode::Normal;
    }

    pub fn close_detail(&mut self) {
        self.viewing_id = None;
        self.view = View::Browser;
        self.input_mode = InputMode::Normal;
    }

    pub fn viewing_listing(&self) -> Option<&AgentListing> {
        self.viewing_id.and_then(|id| self.catalog.get(id))
    }

    pub fn set_detail_tab(&mut self, tab: DetailTab) {
        self.detail_tab = tab;
        self.scroll_offset = 0;
    }

    // ===== Playground runs =====

    /// Kick off a sandbox run for the open listing. Empty input is replaced
    /// by the canned sample payload first.
    pub fn start_run(&mut self) {
        if self.playground.running {
            return;
        }
        let Some(listing) = self.viewing_listing().cloned() else {
            return;
        };

        if self.playground.input.trim().is_empty() {
            self.playground.input = SAMPLE_INPUT.to_string();
        }

        self.run_token += 1;
        let token = self.run_token;
        self.playground.running = true;
        self.playground.started_at = Some(Instant::now());
        self.playground.output = None;
        self.playground.execution_time_ms = None;
        self.playground.cost_usd = None;

        let listing_id = listing.id;
        let run = self.sandbox.run(&listing, self.playground.input.clone());
        let tx = self.run_tx.clone();
        tracing::debug!(listing_id, token, "starting sandbox run");
        tokio::spawn(async move {
            let output = run.await;
            let _ = tx.send(RunEvent {
                token,
                listing_id,
                output,
            });
        });
    }

    /// Apply a completed run. Results from a superseded run, or for a
    /// listing that is no longer open, are dropped.
    pub fn apply_run_event(&mut self, event: RunEvent) {
        if event.token != self.run_token
            || !self.playground.running
            || self.viewing_id != Some(event.listing_id)
        {
            tracing::debug!(token = event.token, "discarding stale run result");
            return;
        }

        let rendered = serde_json::to_string_pretty(&event.output)
            .unwrap_or_else(|e| format!("failed to render output: {e}"));
        self.playground.execution_time_ms = Some(event.output.data.processing_time_ms);
        self.playground.cost_usd = Some(event.output.cost_usd());
        self.playground.output = Some(rendered);
        self.playground.running = false;
        self.playground.started_at = None;
    }

    pub fn clear_playground(&mut self) {
        if !self.playground.running {
            self.playground.clear();
        }
    }

    // ===== Playground input editing =====

    pub fn push_input_char(&mut self, c: char) {
        self.playground.input.push(c);
    }

    pub fn pop_input_char(&mut self) {
        self.playground.input.pop();
    }

    pub fn paste_input(&mut self, text: &str) {
        self.playground.input.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::BoxFuture;
    use pod_core::config::WalletConfig;
    use pod_core::sandbox::{RunData, RunMetadata};
    use pod_core::wallet::DemoWallet;
    use tokio::sync::mpsc;

    struct NoopSandbox;

    impl ExecutionSandbox for NoopSandbox {
        fn run(&self, listing: &AgentListing, _input: String) -> BoxFuture<'static, RunOutput> {
            let agent_id = listing.id;
            let category = listing.category.clone();
            let developer = listing.developer.clone();
            Box::pin(async move {
                RunOutput {
                    status: "success",
                    agent_id,
                    data: RunData {
                        processed: true,
                        result: "done".into(),
                        timestamp: String::new(),
                        confidence: 0.98,
                        processing_time_ms: 120,
                        tokens_used: 1000,
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

    fn app() -> (App, mpsc::UnboundedReceiver<RunEvent>) {
        let (session_tx, _session_rx) = mpsc::unbounded_channel();
        let (run_tx, run_rx) = mpsc::unbounded_channel();
        // The session receiver is dropped: these tests never connect.
        let session = WalletSession::new(
            Arc::new(DemoWallet::new(&WalletConfig::default())),
            session_tx,
        );
        (
            App::new(Catalog::builtin(), session, Arc::new(NoopSandbox), run_tx),
            run_rx,
        )
    }

    #[tokio::test]
    async fn test_search_narrows_and_clamps_selection() {
        let (mut app, _rx) = app();
        let total = app.visible_listings().len();
        app.selected = total - 1;

        for c in "quantlabs".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.visible_listings().len(), 2);
        assert!(app.selected < app.visible_listings().len());

        app.clear_search();
        assert_eq!(app.visible_listings().len(), total);
    }

    #[tokio::test]
    async fn test_category_cycle_returns_to_none() {
        let (mut app, _rx) = app();
        for _ in 0..CATEGORIES.len() {
            app.cycle_category();
            assert!(app.descriptor.category.is_some());
        }
        app.cycle_category();
        assert_eq!(app.descriptor.category, None);
    }

    #[tokio::test]
    async fn test_open_detail_targets_selected_listing() {
        let (mut app, _rx) = app();
        app.descriptor.sort = SortKey::Popular;
        app.refresh_view();
        app.selected = 0;
        app.open_detail();

        let viewing = app.viewing_listing().expect("open listing");
        let expected = app.visible_listings()[0].id;
        assert_eq!(viewing.id, expected);
        assert_eq!(app.view, View::Detail);
    }

    #[tokio::test]
    async fn test_run_fills_empty_input_with_sample() {
        let (mut app, mut rx) = app();
        app.open_detail();
        app.start_run();
        assert!(app.playground.running);
        assert_eq!(app.playground.input, SAMPLE_INPUT);

        let event = rx.recv().await.expect("run event");
        app.apply_run_event(event);
        assert!(!app.playground.running);
        assert!(app.playground.output.as_deref().unwrap_or("").contains("success"));
        assert_eq!(app.playground.execution_time_ms, Some(120));
        assert!((app.playground.cost_usd.unwrap() - 0.1).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_stale_run_result_is_dropped() {
        let (mut app, mut rx) = app();
        app.open_detail();
        app.start_run();
        let event = rx.recv().await.expect("run event");

        // The user closed the detail view before the run resolved.
        app.close_detail();
        app.playground.clear();
        app.apply_run_event(event);
        assert!(app.playground.output.is_none());
    }

    #[tokio::test]
    async fn test_selection_moves_by_row_in_grid() {
        let (mut app, _rx) = app();
        assert_eq!(app.layout, LayoutMode::Grid);
        app.select_row_down();
        assert_eq!(app.selected, GRID_COLUMNS);
        app.select_row_up();
        assert_eq!(app.selected, 0);

        app.toggle_layout();
        app.select_row_down();
        assert_eq!(app.selected, 1);
    }

    #[tokio::test]
    async fn test_empty_view_keeps_selection_at_zero() {
        let (mut app, _rx) = app();
        for c in "zzzz".chars() {
            app.push_search_char(c);
        }
        assert!(app.visible_listings().is_empty());
        app.select_next();
        assert_eq!(app.selected, 0);
        assert!(app.selected_listing().is_none());
    }
}
