//! Form services
//!
//! Business logic for the two flows the form runs, independent of any
//! rendering layer:
//! - `shorten`: validate → create → display short URL
//! - `redirect`: read `u` from the page location → resolve → navigate
//! - `clipboard`: copy the displayed short URL
//!
//! All user feedback goes through [`Notifier`] as toasts.

pub mod clipboard;
pub mod form_state;
pub mod navigation;
pub mod notification;
pub mod redirect;
pub mod shorten;

pub use clipboard::{ClipboardWriter, copy_short_url};
pub use form_state::{FormState, RedirectState, SubmitState};
pub use navigation::{Navigator, SystemBrowser};
pub use notification::{Notifier, Toast, ToastQueue, ToastVariant};
pub use redirect::{PendingRedirect, RedirectOutcome, RedirectService, short_code_from_location};
pub use shorten::ShortenService;

#[cfg(feature = "tui")]
pub use clipboard::SystemClipboard;
