use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::{ContentSource, Error, Result, TreeListing, TreeNode};

/// In-memory [`ContentSource`]; any URL without a canned response fails.
#[derive(Default)]
pub struct MockSource {
    trees: HashMap<String, TreeListing>,
    texts: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(mut self, url: &str, nodes: &[(&str, &str)]) -> Self {
        let tree = nodes
            .iter()
            .map(|(path, url)| TreeNode {
                path: path.to_string(),
                url: url.to_string(),
                kind: None,
            })
            .collect();
        self.trees.insert(url.to_string(), TreeListing { tree });
        self
    }

    pub fn with_text(mut self, url: &str, text: &str) -> Self {
        self.texts.insert(url.to_string(), text.to_string());
        self
    }

    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    async fn record(&self, url: &str) {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
    }
}

fn not_found(url: &str) -> Error {
    Error::External(anyhow::anyhow!("no canned response for {}", url))
}

#[async_trait]
impl ContentSource for MockSource {
    async fn fetch_tree(&self, url: &str) -> Result<TreeListing> {
        self.record(url).await;
        self.trees.get(url).cloned().ok_or_else(|| not_found(url))
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.record(url).await;
        self.texts.get(url).cloned().ok_or_else(|| not_found(url))
    }
}
