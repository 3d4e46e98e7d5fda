//! Asset retrieval over HTTP
//!
//! Each fetch is a single unauthenticated GET whose body is streamed
//! straight into the destination file.

use crate::error::{Result, ScaffoldError};
use crate::report::{ConsoleReporter, Reporter};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Retrieves one remote file into a local path
#[allow(async_fn_in_trait)]
pub trait AssetFetcher {
    /// Download `url` into `destination`, creating parent directories as needed
    async fn fetch(&self, url: &Url, destination: &Path) -> Result<()>;
}

impl<F: AssetFetcher> AssetFetcher for &F {
    async fn fetch(&self, url: &Url, destination: &Path) -> Result<()> {
        (**self).fetch(url, destination).await
    }
}

/// Fetcher backed by a reqwest client
pub struct HttpFetcher<R = ConsoleReporter> {
    client: reqwest::Client,
    reporter: R,
}

impl<R: Reporter> HttpFetcher<R> {
    /// Create a new fetcher with a custom user agent
    pub fn new(user_agent: &str, reporter: R) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            reporter,
        }
    }
}

impl<R: Reporter> AssetFetcher for HttpFetcher<R> {
    async fn fetch(&self, url: &Url, destination: &Path) -> Result<()> {
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(ScaffoldError::network(url))?;

        if !response.status().is_success() {
            return Err(ScaffoldError::RemoteStatus {
                url: url.clone(),
                status: response.status().to_string(),
            });
        }

        // Ensure the local directory exists
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(ScaffoldError::filesystem(parent))?;
            }
        }

        let mut file = fs::File::create(destination)
            .await
            .map_err(ScaffoldError::filesystem(destination))?;

        while let Some(chunk) = response.chunk().await.map_err(ScaffoldError::network(url))? {
            file.write_all(&chunk)
                .await
                .map_err(ScaffoldError::filesystem(destination))?;
        }
        file.flush()
            .await
            .map_err(ScaffoldError::filesystem(destination))?;

        self.reporter.success(&format!(
            "Downloaded {} -> {}",
            url,
            destination.display()
        ));
        Ok(())
    }
}
