//! linkform - a terminal front end for a remote URL shortening API
//!
//! Collects a long URL and an optional UTC expiration, asks the shortening
//! API for a short code and shows the resulting short link. Launched with a
//! page location carrying `u=<code>`, it resolves the code and opens the
//! long URL in the browser instead.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `client`: Gateway trait and the HTTP client for the shortening API
//! - `services`: Form state, submit/redirect flows, notifications, clipboard
//! - `interfaces`: User interfaces (TUI)
//! - `config`: Configuration management
//! - `runtime`: Mode selection and execution
//! - `system`: Logging setup
//! - `utils`: URL validation, time-of-day options

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod system;
pub mod utils;
