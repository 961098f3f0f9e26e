use async_trait::async_trait;

use crate::types::TreeListing;
use crate::Result;

/// Remote access the article pipeline needs from a hosting service.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch and decode a directory listing.
    async fn fetch_tree(&self, url: &str) -> Result<TreeListing>;

    /// Fetch a file body as plain text.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}
