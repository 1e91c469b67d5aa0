//! App state and operations
//!
//! - `state`: core App struct, screens and focus
//! - `form_operations`: submit, copy, redirect and date/time editing

mod form_operations;
mod state;

pub use state::{App, CurrentScreen, FocusField, PendingAction};
