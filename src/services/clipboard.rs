//! Clipboard copy of the displayed short URL

use tracing::warn;

use super::form_state::FormState;
use super::notification::{Notifier, Toast};
use crate::errors::Result;

/// Anything that can take text onto the system clipboard
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Platform clipboard via arboard
///
/// The handle is opened on first use and kept for the session. On X11 and
/// Wayland the copied text lives only as long as the handle that set it.
#[cfg(feature = "tui")]
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

#[cfg(feature = "tui")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(feature = "tui")]
impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        use crate::errors::LinkFormError;

        let clipboard = open_once(&mut self.handle, || {
            arboard::Clipboard::new().map_err(|e| LinkFormError::clipboard(e.to_string()))
        })?;
        clipboard
            .set_text(text)
            .map_err(|e| LinkFormError::clipboard(e.to_string()))
    }
}

/// Reuse the handle in `slot`, opening it only when empty. A failed open
/// leaves the slot empty so the next copy retries.
#[cfg(any(feature = "tui", test))]
fn open_once<C>(slot: &mut Option<C>, open: impl FnOnce() -> Result<C>) -> Result<&mut C> {
    let handle = match slot.take() {
        Some(handle) => handle,
        None => open()?,
    };
    Ok(slot.insert(handle))
}

/// Copy the current short URL; returns whether anything was copied
pub fn copy_short_url(
    form: &FormState,
    clipboard: &mut dyn ClipboardWriter,
    notifier: &mut dyn Notifier,
) -> bool {
    let Some(short_url) = form.short_url.as_deref() else {
        return false;
    };

    match clipboard.write_text(short_url) {
        Ok(()) => {
            notifier.notify(Toast::info("Copied to clipboard!"));
            true
        }
        Err(e) => {
            warn!("Clipboard write failed: {}", e);
            notifier.notify(Toast::error("Could not access the clipboard"));
            false
        }
    }
}
