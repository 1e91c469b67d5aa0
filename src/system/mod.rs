//! Process-level plumbing

pub mod logging;
pub mod panic_handler;

pub use logging::init_logging;
#[cfg(feature = "tui")]
pub use panic_handler::install_panic_hook;
