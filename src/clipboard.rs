//! Best-effort system clipboard access.

use tracing::debug;

/// Copy `text` to the system clipboard. Failures (headless session, no
/// clipboard provider) are logged and swallowed; the copy action gives no
/// feedback either way.
pub fn copy_text(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text.to_string()) {
                debug!("clipboard write failed: {e}");
            }
        }
        Err(e) => debug!("clipboard unavailable: {e}"),
    }
}
