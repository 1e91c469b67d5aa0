pub mod args;
pub mod constants;
mod r#impl;
mod structs;

pub use args::Args;
pub use r#impl::{get_config, init_config, try_get_config};
pub use structs::*;
