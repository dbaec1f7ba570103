//! In-memory fakes for the browser session capability.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use shopgrab_lib::shopgrab_browser::{BrowserSession, ListingNode, SessionError};

/// A canned listing node backed by selector maps.
#[derive(Clone, Debug, Default)]
pub struct FakeNode {
    texts: HashMap<String, String>,
    attrs: HashMap<(String, String), String>,
    stale: bool,
}

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, selector: &str, text: &str) -> Self {
        self.texts.insert(selector.to_string(), text.to_string());
        self
    }

    pub fn with_attr(mut self, selector: &str, attribute: &str, value: &str) -> Self {
        self.attrs.insert(
            (selector.to_string(), attribute.to_string()),
            value.to_string(),
        );
        self
    }

    /// Makes every lookup fail as an infrastructure fault.
    pub fn stale(mut self) -> Self {
        self.stale = true;
        self
    }

    fn check(&self) -> Result<(), SessionError> {
        if self.stale {
            Err(SessionError::Stale("fake node went stale".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ListingNode for FakeNode {
    async fn text_of(&self, selector: &str) -> Result<Option<String>, SessionError> {
        self.check()?;
        Ok(self.texts.get(selector).cloned())
    }

    async fn attr_of(
        &self,
        selector: &str,
        attribute: &str,
    ) -> Result<Option<String>, SessionError> {
        self.check()?;
        Ok(self
            .attrs
            .get(&(selector.to_string(), attribute.to_string()))
            .cloned())
    }
}

/// What one navigated-to page does when queried.
pub enum FakePage {
    /// The listing container renders with these nodes.
    Ready(Vec<FakeNode>),
    /// The listing container never appears; waits time out.
    NeverReady,
}

/// Browser session serving a fixed sequence of pages, one per `navigate`.
pub struct FakeSession {
    pages: Vec<FakePage>,
    visited: Mutex<Vec<String>>,
}

impl FakeSession {
    pub fn new(pages: Vec<FakePage>) -> Self {
        Self {
            pages,
            visited: Mutex::new(Vec::new()),
        }
    }

    /// URLs navigated to so far, in order.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    fn current_page(&self) -> Option<&FakePage> {
        let visits = self.visited.lock().unwrap().len();
        visits.checked_sub(1).and_then(|i| self.pages.get(i))
    }
}

#[async_trait]
impl BrowserSession for FakeSession {
    type Node = FakeNode;

    async fn navigate(&self, url: &str) -> Result<(), SessionError> {
        self.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), SessionError> {
        match self.current_page() {
            Some(FakePage::Ready(_)) => Ok(()),
            _ => Err(SessionError::WaitTimeout {
                selector: selector.to_string(),
                timeout,
            }),
        }
    }

    async fn find_all(&self, _selector: &str) -> Result<Vec<FakeNode>, SessionError> {
        match self.current_page() {
            Some(FakePage::Ready(nodes)) => Ok(nodes.clone()),
            _ => Ok(Vec::new()),
        }
    }

    async fn close(self) -> Result<(), SessionError> {
        Ok(())
    }
}
