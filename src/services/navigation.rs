//! Browser navigation
//!
//! Leaving the page for the resolved long URL means handing it to the
//! platform's URL opener. The target comes from the remote API, so it is
//! re-serialized through `url` and never passed through a shell.

use std::process::{Command, Stdio};

use tracing::debug;
use url::Url;

use crate::errors::{LinkFormError, Result};
use crate::utils::url_validator::validate_url;

pub trait Navigator {
    fn navigate(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs with the system's default browser
#[derive(Debug, Default)]
pub struct SystemBrowser;

/// Validated, percent-encoded form of `url`
///
/// Serialization encodes spaces and quotes, so the result is a single
/// argv entry on every platform.
pub(crate) fn normalized_target(url: &str) -> Result<String> {
    validate_url(url).map_err(|e| LinkFormError::navigation(e.to_string()))?;
    let parsed = Url::parse(url.trim()).map_err(|e| LinkFormError::navigation(e.to_string()))?;
    Ok(parsed.into())
}

/// Opener program and arguments for `os` (a `std::env::consts::OS` value)
///
/// Windows uses `rundll32 url.dll,FileProtocolHandler` rather than
/// `cmd /C start`, which would treat `&` in a query as a command separator.
pub(crate) fn opener_for(os: &str, url: &str) -> (&'static str, Vec<String>) {
    match os {
        "macos" => ("open", vec![url.to_string()]),
        "windows" => (
            "rundll32",
            vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()],
        ),
        _ => ("xdg-open", vec![url.to_string()]),
    }
}

impl SystemBrowser {
    fn command(url: &str) -> Command {
        let (program, args) = opener_for(std::env::consts::OS, url);
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    }
}

impl Navigator for SystemBrowser {
    fn navigate(&mut self, url: &str) -> Result<()> {
        // Only http(s) targets are handed to the opener
        let target = normalized_target(url)?;

        debug!("Opening {} in the system browser", target);
        let status = Self::command(&target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| LinkFormError::navigation(format!("failed to launch opener: {}", e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(LinkFormError::navigation(format!(
                "opener exited with {}",
                status
            )))
        }
    }
}
