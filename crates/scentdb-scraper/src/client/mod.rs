//! HTTP access to storefront pages.

mod urls;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

pub use urls::{image_url, resolve_link};

/// Anything that can hand the crawler the raw HTML of a page.
///
/// [`StorefrontClient`] fetches over HTTP; tests supply in-memory fixtures.
pub trait PageSource {
    /// Fetches the page at `url` and returns its body.
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, ScraperError>>;
}

/// HTTP client for storefront HTML pages.
///
/// Non-2xx responses become typed errors. There is no retry: the crawler
/// treats a failed page as absent for the rest of the run.
pub struct StorefrontClient {
    client: Client,
}

impl StorefrontClient {
    /// Creates a `StorefrontClient` with a per-request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one HTML page.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`]: `url` does not parse.
    /// - [`ScraperError::NotFound`]: HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`ScraperError::Http`]: network, TLS, or timeout failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

impl PageSource for StorefrontClient {
    async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        self.fetch_html(url).await
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
