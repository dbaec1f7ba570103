//! Capability traits for the rendering engine.
//!
//! The pipeline crates depend on these traits rather than on `thirtyfour`
//! directly, so the harvester can be exercised against an in-memory fake
//! without a browser or a network.

use std::time::Duration;

use async_trait::async_trait;

use crate::SessionError;

/// One rendered listing on the results page.
///
/// Lookups return `Ok(None)` when the element or attribute is absent; callers
/// treat that as a normal not-found outcome and substitute a sentinel. `Err`
/// is reserved for infrastructure faults such as a stale node or a dead
/// session, and propagates.
///
/// A node is only valid for the page it was found on; it must not be used
/// after the session navigates away.
#[async_trait]
pub trait ListingNode: Send + Sync {
    /// Text content of the first descendant matching `selector`.
    async fn text_of(&self, selector: &str) -> Result<Option<String>, SessionError>;

    /// Value of `attribute` on the first descendant matching `selector`.
    /// `Ok(None)` if either the element or the attribute is missing.
    async fn attr_of(&self, selector: &str, attribute: &str)
        -> Result<Option<String>, SessionError>;
}

/// A live browser session capable of loading and querying rendered pages.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    type Node: ListingNode;

    /// Loads the given URL.
    async fn navigate(&self, url: &str) -> Result<(), SessionError>;

    /// Waits until at least one element matching `selector` is present in the
    /// rendered DOM, or fails with [`SessionError::WaitTimeout`].
    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), SessionError>;

    /// Returns every element matching `selector`, in document order.
    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Node>, SessionError>;

    /// Releases the session. Must run on every exit path once the session
    /// exists, including after failures.
    async fn close(self) -> Result<(), SessionError>;
}
