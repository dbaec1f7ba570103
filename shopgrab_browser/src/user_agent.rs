//! Static identification string presented on outgoing browser requests.

/// The user agent the session identifies itself with. A fixed, browser-like
/// string; no rotation or other evasion is attempted.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
