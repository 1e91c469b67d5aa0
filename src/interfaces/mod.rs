//! User interfaces

#[cfg(feature = "tui")]
pub mod tui;
