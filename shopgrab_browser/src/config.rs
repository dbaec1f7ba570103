//! Session configuration.

use crate::user_agent::USER_AGENT;

/// Configuration for a [`WebDriverSession`](crate::WebDriverSession).
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Address of the WebDriver endpoint (chromedriver).
    pub webdriver_url: String,
    /// Run the browser without a visible window.
    pub headless: bool,
    /// Browser window size as (width, height).
    pub window_size: (u32, u32),
    /// Identification string sent with every request.
    pub user_agent: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            window_size: (1920, 1080),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
