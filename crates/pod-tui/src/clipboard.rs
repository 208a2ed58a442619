use arboard::Clipboard;

use crate::ui::{App, Notification};

/// Copy the connected wallet address to the system clipboard.
///
/// A no-op while the wallet is not connected. Clipboard failures are
/// logged and swallowed; the platform denying access is not worth an
/// error toast.
pub fn copy_wallet_address(app: &mut App) {
    let Some(address) = app.session.address().map(str::to_string) else {
        tracing::debug!("copy ignored: wallet not connected");
        return;
    };

    let mut clipboard = match Clipboard::new() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            return;
        }
    };

    match clipboard.set_text(address) {
        Ok(()) => app.notify(Notification::success("Address copied to clipboard")),
        Err(e) => tracing::warn!(error = %e, "clipboard write failed"),
    }
}
