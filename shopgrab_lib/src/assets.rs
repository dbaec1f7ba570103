//! Asset Fetcher: downloads listing thumbnails into the content store.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use shopgrab_browser::USER_AGENT;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const IMAGE_EXTENSION: &str = "jpg";

/// Failed to construct the asset store's HTTP client.
#[derive(thiserror::Error, Debug)]
#[error("failed to build HTTP client: {0}")]
pub struct AssetStoreError(#[from] reqwest::Error);

/// Downloads images over plain HTTP and writes them into a local directory.
///
/// Every failure mode past construction (non-200 status, timeout, transport
/// or write error) is logged and reported as `None`; the fetcher never fails
/// its caller.
pub struct AssetStore {
    http: reqwest::Client,
    dir: PathBuf,
}

impl AssetStore {
    /// Creates a store writing into `dir`. The directory must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AssetStoreError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            dir: dir.into(),
        })
    }

    /// Directory the store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fetches `url` and stores the body as `<sanitized desired_name>.jpg`,
    /// overwriting any existing file of that name. Returns the stored
    /// filename (not the full path), or `None` if the URL is absent or
    /// anything fails. An absent URL performs no network call at all.
    pub async fn fetch_and_store(&self, url: Option<&str>, desired_name: &str) -> Option<String> {
        let url = url?;

        let response = match self.http.get(url).timeout(FETCH_TIMEOUT).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("error downloading image {}: {}", url, e);
                return None;
            }
        };
        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(
                "image download {} returned status {}",
                url,
                response.status()
            );
            return None;
        }

        let filename = format!("{}.{}", sanitize_name(desired_name), IMAGE_EXTENSION);
        let path = self.dir.join(&filename);
        match write_stream(response, &path).await {
            Ok(()) => Some(filename),
            Err(e) => {
                tracing::warn!("error writing image {} to {}: {}", url, path.display(), e);
                None
            }
        }
    }
}

/// Streams the response body to `path` chunk by chunk. The file handle is
/// closed as soon as this returns, success or not.
async fn write_stream(response: reqwest::Response, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path).await?;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(std::io::Error::other)?;
        file.write_all(&chunk).await?;
    }
    file.flush().await
}

/// Retains only alphanumerics, spaces, periods, and underscores, then trims
/// trailing whitespace.
fn sanitize_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '_'))
        .collect();
    kept.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_disallowed_characters() {
        assert_eq!(
            sanitize_name(r#"Gaming/Laptop: 17" RTX_3.5"#),
            "GamingLaptop 17 RTX_3.5"
        );
    }

    #[test]
    fn sanitize_trims_trailing_whitespace() {
        assert_eq!(sanitize_name("Mouse Pad / "), "Mouse Pad");
    }

    #[test]
    fn sanitize_keeps_unicode_alphanumerics() {
        assert_eq!(sanitize_name("Café au lait"), "Café au lait");
    }
}
