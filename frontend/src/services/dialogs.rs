use speechdown_core::Confirmation;

/// Native `window.confirm` prompt
pub struct BrowserConfirmation;

impl Confirmation for BrowserConfirmation {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}
