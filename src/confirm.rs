//! Browser confirmation prompt for destructive actions

use erp_core::Confirm;

/// Blocking `window.confirm`. No window means no consent.
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
