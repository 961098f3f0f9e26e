use async_trait::async_trait;
use folio_core::{ContentSource, Result, TreeListing};
use reqwest::Client;
use tracing::debug;

/// The listing API rejects requests without a user agent.
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// [`ContentSource`] backed by plain HTTP requests.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
}

impl GithubClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for GithubClient {
    async fn fetch_tree(&self, url: &str) -> Result<TreeListing> {
        debug!("📂 Listing {}", url);
        let listing = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<TreeListing>()
            .await?;
        Ok(listing)
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("📄 Fetching {}", url);
        let text = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(text)
    }
}
