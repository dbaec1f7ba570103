//! Error types for the browser session layer.

use std::time::Duration;

/// Errors that can occur while driving the browser session.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// The WebDriver endpoint rejected or failed a command.
    #[error("webdriver command failed: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
    /// No element matching the selector appeared within the readiness timeout.
    #[error("timed out after {timeout:?} waiting for `{selector}`")]
    WaitTimeout { selector: String, timeout: Duration },
    /// The element or session behind a handle is no longer usable, e.g. the
    /// page navigated away beneath a listing node.
    #[error("stale element or session: {0}")]
    Stale(String),
}
