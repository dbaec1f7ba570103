//! Production browser session over a WebDriver endpoint.

use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::prelude::*;
use tokio::time::sleep;

use crate::{BrowserSession, ListingNode, SessionConfig, SessionError};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Browser session backed by a chromedriver-compatible WebDriver endpoint.
pub struct WebDriverSession {
    driver: WebDriver,
}

impl WebDriverSession {
    /// Connects to the WebDriver endpoint and opens a browser window with the
    /// configured headless mode and identification string.
    pub async fn connect(config: &SessionConfig) -> Result<Self, SessionError> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.add_arg("--headless")?;
        }
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;
        caps.add_arg(&format!(
            "--window-size={},{}",
            config.window_size.0, config.window_size.1
        ))?;
        caps.add_arg(&format!("user-agent={}", config.user_agent))?;

        tracing::debug!(
            "connecting to webdriver at {} (headless: {})",
            config.webdriver_url,
            config.headless
        );
        let driver = WebDriver::new(&config.webdriver_url, caps).await?;
        Ok(Self { driver })
    }
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    type Node = WebDriverNode;

    async fn navigate(&self, url: &str) -> Result<(), SessionError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), SessionError> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if !self.driver.find_all(By::Css(selector)).await?.is_empty() {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(SessionError::WaitTimeout {
                    selector: selector.to_string(),
                    timeout,
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<WebDriverNode>, SessionError> {
        let elements = self.driver.find_all(By::Css(selector)).await?;
        Ok(elements.into_iter().map(WebDriverNode).collect())
    }

    async fn close(self) -> Result<(), SessionError> {
        self.driver.quit().await?;
        Ok(())
    }
}

/// Opaque handle to one rendered listing element.
pub struct WebDriverNode(WebElement);

#[async_trait]
impl ListingNode for WebDriverNode {
    async fn text_of(&self, selector: &str) -> Result<Option<String>, SessionError> {
        // An empty find_all result is the not-found case; it is not an error.
        let Some(element) = self.0.find_all(By::Css(selector)).await?.into_iter().next() else {
            return Ok(None);
        };
        Ok(Some(element.text().await?))
    }

    async fn attr_of(
        &self,
        selector: &str,
        attribute: &str,
    ) -> Result<Option<String>, SessionError> {
        let Some(element) = self.0.find_all(By::Css(selector)).await?.into_iter().next() else {
            return Ok(None);
        };
        Ok(element.attr(attribute).await?)
    }
}
