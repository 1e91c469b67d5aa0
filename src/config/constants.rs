//! Compile-time settings
//!
//! The gateway and the public short-link domain are fixed at build time;
//! they are not read from `linkform.toml`.

/// Shortening API gateway (creation and resolution share one endpoint)
pub const GATEWAY_ENDPOINT: &str = "https://short.url/api";

/// Public domain user-facing short links are built on
pub const SHORT_LINK_DOMAIN: &str = "https://short.url";

/// Query parameter carrying the short code on the page location
pub const SHORT_CODE_PARAM: &str = "u";

/// Time the redirecting indicator stays up before navigation
pub const REDIRECT_DELAY_MS: u64 = 1000;

/// HTTP request timeout for both gateway calls
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default expiration time-of-day as (hour, minute), UTC
pub const DEFAULT_EXPIRATION_TIME: (u8, u8) = (12, 0);

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "linkform.toml";
