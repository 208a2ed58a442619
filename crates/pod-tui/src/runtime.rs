use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;

use pod_core::session::{SessionEvent, SessionTransition};

use crate::input::handle_key;
use crate::render::render;
use crate::ui::app::TICK_MILLIS;
use crate::ui::format::short_address;
use crate::ui::{App, InputMode, Notification, RunEvent, Tui, View};

/// The single-threaded event loop. Descriptor edits, session transitions
/// and run results all land here one at a time, so every recomputation of
/// the derived view fully supersedes the previous one.
pub async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    mut session_rx: UnboundedReceiver<SessionEvent>,
    mut run_rx: UnboundedReceiver<RunEvent>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(TICK_MILLIS));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                if app.pending_quit {
                                    app.quit();
                                } else {
                                    app.pending_quit = true;
                                }
                            } else {
                                app.pending_quit = false;
                                handle_key(app, key);
                            }
                        }
                        Event::Paste(text) => handle_paste(app, &text),
                        _ => {}
                    }
                }
            }

            Some(event) = session_rx.recv() => {
                match app.session.apply(event) {
                    Some(SessionTransition::Connected { address }) => {
                        app.notify(Notification::success(format!(
                            "Wallet connected [{}]",
                            short_address(&address)
                        )));
                    }
                    Some(SessionTransition::ConnectFailed { reason }) => {
                        app.notify(Notification::error(format!(
                            "Failed to connect wallet: {reason}"
                        )));
                    }
                    // Stale result from an abandoned attempt; already logged.
                    None => {}
                }
            }

            Some(run) = run_rx.recv() => {
                app.apply_run_event(run);
            }

            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }

    Ok(())
}

fn handle_paste(app: &mut App, text: &str) {
    match app.input_mode {
        InputMode::Search if app.view == View::Browser => {
            for c in text.chars() {
                app.push_search_char(c);
            }
        }
        InputMode::Editing if app.view == View::Detail => app.paste_input(text),
        _ => {}
    }
}
