//! Wallet session state machine.
//!
//! `WalletSession` owns the single mutable session cell. Consumers read
//! state through it and learn about changes via [`SessionEvent`]s on the
//! channel handed to [`WalletSession::new`]; only the session's own
//! methods mutate the cell.
//!
//! Connecting is the one suspending operation: `connect` stamps an
//! attempt token, spawns the provider call and returns immediately. The
//! resolution comes back through the event loop as a
//! [`SessionEvent::ConnectResolved`], which is applied only while the
//! token is still current — a `disconnect` issued mid-flight bumps the
//! token, so a late success from the abandoned attempt is discarded.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::wallet::{WalletError, WalletProvider};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        address: String,
    },
}

/// Emitted by spawned connect attempts, consumed by the owner's event loop
/// and fed back through [`WalletSession::apply`].
#[derive(Debug)]
pub enum SessionEvent {
    ConnectResolved {
        attempt: u64,
        result: Result<String, WalletError>,
    },
}

/// Outcome of applying a [`SessionEvent`], for the shell to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    Connected { address: String },
    ConnectFailed { reason: String },
}

pub struct WalletSession {
    state: SessionState,
    /// Token identifying the current connect attempt. Bumped by every
    /// `connect` and `disconnect`, which is what invalidates stale results.
    attempt: u64,
    provider: Arc<dyn WalletProvider>,
    events_tx: UnboundedSender<SessionEvent>,
}

impl WalletSession {
    pub fn new(provider: Arc<dyn WalletProvider>, events_tx: UnboundedSender<SessionEvent>) -> Self {
        Self {
            state: SessionState::Disconnected,
            attempt: 0,
            provider,
            events_tx,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_connecting(&self) -> bool {
        self.state == SessionState::Connecting
    }

    /// The connected address, if any. `copy_address` and the header readout
    /// both go through here, so both are no-ops unless connected.
    pub fn address(&self) -> Option<&str> {
        match &self.state {
            SessionState::Connected { address } => Some(address),
            _ => None,
        }
    }

    /// Begin establishing a session. Only valid from `Disconnected`; while
    /// already connecting or connected this is a no-op.
    pub fn connect(&mut self) {
        if self.state != SessionState::Disconnected {
            tracing::debug!(state = ?self.state, "connect ignored");
            return;
        }

        self.attempt += 1;
        self.state = SessionState::Connecting;
        let attempt = self.attempt;
        let establish = self.provider.establish_session();
        let tx = self.events_tx.clone();
        tracing::info!(attempt, "establishing wallet session");

        tokio::spawn(async move {
            let result = establish.await;
            // The receiver only goes away on shutdown.
            let _ = tx.send(SessionEvent::ConnectResolved { attempt, result });
        });
    }

    /// Drop the session from any state. An in-flight attempt keeps running
    /// but its result will no longer match the current token.
    pub fn disconnect(&mut self) {
        self.attempt += 1;
        if self.state != SessionState::Disconnected {
            tracing::info!("wallet disconnected");
        }
        self.state = SessionState::Disconnected;
    }

    /// Apply a resolved connect attempt. Returns the resulting transition,
    /// or `None` when the event was stale and discarded.
    pub fn apply(&mut self, event: SessionEvent) -> Option<SessionTransition> {
        let SessionEvent::ConnectResolved { attempt, result } = event;

        if attempt != self.attempt || self.state != SessionState::Connecting {
            tracing::debug!(attempt, current = self.attempt, "discarding stale connect result");
            return None;
        }

        match result {
            Ok(address) => {
                tracing::info!(%address, "wallet session established");
                self.state = SessionState::Connected {
                    address: address.clone(),
                };
                Some(SessionTransition::Connected { address })
            }
            Err(err) => {
                tracing::warn!(error = %err, "wallet connect failed");
                self.state = SessionState::Disconnected;
                Some(SessionTransition::ConnectFailed {
                    reason: err.to_string(),
                })
            }
        }
    }
}
