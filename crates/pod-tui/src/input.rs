//! Keyboard dispatch for the browser and detail views.

use crossterm::event::{KeyCode, KeyEvent};

use crate::clipboard::copy_wallet_address;
use crate::ui::{App, DetailTab, InputMode, Notification, View};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.view {
        View::Browser => match app.input_mode {
            InputMode::Search => handle_search_key(app, key),
            _ => handle_browser_key(app, key),
        },
        View::Detail => match app.input_mode {
            InputMode::Editing => handle_playground_edit_key(app, key),
            _ => handle_detail_key(app, key),
        },
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}

fn handle_browser_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => app.input_mode = InputMode::Search,
        KeyCode::Esc => app.clear_search(),

        KeyCode::Up | KeyCode::Char('k') => app.select_row_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_row_down(),
        KeyCode::Left | KeyCode::Char('h') => app.select_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next(),
        KeyCode::Enter => app.open_detail(),

        KeyCode::Char('f') => app.cycle_quick_filter(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('g') => app.toggle_layout(),
        KeyCode::Char('b') => app.toggle_sidebar(),

        _ => handle_wallet_key(app, key),
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_detail(),
        KeyCode::Tab => {
            let next = app.detail_tab.cycle_next();
            app.set_detail_tab(next);
        }
        KeyCode::Char('1') => app.set_detail_tab(DetailTab::Playground),
        KeyCode::Char('2') => app.set_detail_tab(DetailTab::Analytics),
        KeyCode::Char('3') => app.set_detail_tab(DetailTab::Reviews),
        KeyCode::Char('4') => app.set_detail_tab(DetailTab::Versions),

        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_offset = app.scroll_offset.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_offset = app.scroll_offset.saturating_add(1);
        }

        KeyCode::Char('e') if app.detail_tab == DetailTab::Playground => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('r') if app.detail_tab == DetailTab::Playground => app.start_run(),
        KeyCode::Char('x') if app.detail_tab == DetailTab::Playground => app.clear_playground(),

        _ => handle_wallet_key(app, key),
    }
}

fn handle_playground_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => app.pop_input_char(),
        KeyCode::Enter => app.push_input_char('\n'),
        KeyCode::Char(c) => app.push_input_char(c),
        _ => {}
    }
}

/// Wallet actions are available from every view in normal mode.
fn handle_wallet_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('w') => {
            if app.session.address().is_none() && !app.session.is_connecting() {
                app.notify(Notification::info("Connecting wallet..."));
            }
            app.session.connect();
        }
        KeyCode::Char('d') => {
            let was_connected = app.session.address().is_some() || app.session.is_connecting();
            app.session.disconnect();
            if was_connected {
                app.notify(Notification::info("Wallet disconnected"));
            }
        }
        KeyCode::Char('y') => copy_wallet_address(app),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use futures::future::BoxFuture;
    use pod_core::config::WalletConfig;
    use pod_core::sandbox::{ExecutionSandbox, RunOutput};
    use pod_core::wallet::DemoWallet;
    use pod_core::{AgentListing, Catalog, QuickFilter, SessionState, WalletSession};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    struct UnusedSandbox;

    impl ExecutionSandbox for UnusedSandbox {
        fn run(&self, _listing: &AgentListing, _input: String) -> BoxFuture<'static, RunOutput> {
            unreachable!("sandbox is not exercised by input tests")
        }
    }

    fn app() -> App {
        let (session_tx, _session_rx) = mpsc::unbounded_channel();
        let (run_tx, _run_rx) = mpsc::unbounded_channel();
        let session = WalletSession::new(
            Arc::new(DemoWallet::new(&WalletConfig::default())),
            session_tx,
        );
        App::new(Catalog::builtin(), session, Arc::new(UnusedSandbox), run_tx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(
            app,
            KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        );
    }

    #[tokio::test]
    async fn test_slash_enters_search_and_chars_filter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.descriptor.search, "t");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.descriptor.search, "");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_filter_keys_cycle_descriptor() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.descriptor.quick_filter, Some(QuickFilter::Featured));
        press(&mut app, KeyCode::Char('c'));
        assert!(app.descriptor.category.is_some());
        press(&mut app, KeyCode::Char('s'));
        assert_ne!(app.descriptor.sort, Default::default());
    }

    #[tokio::test]
    async fn test_enter_and_escape_toggle_detail_view() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, View::Detail);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Browser);
    }

    #[tokio::test]
    async fn test_wallet_connect_key_starts_session() {
        let mut app = app();
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.session.state(), &SessionState::Connecting);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.session.state(), &SessionState::Disconnected);
    }

    #[tokio::test]
    async fn test_playground_edit_mode_captures_chars() {
        let mut app = app();
        press(&mut app, KeyCode::Enter); // open detail
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input_mode, InputMode::Editing);

        press(&mut app, KeyCode::Char('{'));
        press(&mut app, KeyCode::Char('}'));
        assert_eq!(app.playground.input, "{}");

        // 'q' is input while editing, not quit
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_tab_cycles_detail_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.detail_tab, DetailTab::Playground);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.detail_tab, DetailTab::Analytics);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.detail_tab, DetailTab::Versions);
    }
}
