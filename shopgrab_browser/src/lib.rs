//! Browser Session capability for shopgrab.
//!
//! Exposes the [`BrowserSession`] and [`ListingNode`] traits that the
//! extraction pipeline is written against, plus [`WebDriverSession`], the
//! production implementation backed by a chromedriver-compatible endpoint.

mod config;
mod errors;
mod session;
mod user_agent;
mod webdriver;

pub use self::config::SessionConfig;
pub use self::errors::SessionError;
pub use self::session::{BrowserSession, ListingNode};
pub use self::user_agent::USER_AGENT;
pub use self::webdriver::{WebDriverNode, WebDriverSession};
