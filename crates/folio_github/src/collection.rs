use std::sync::Arc;

use folio_core::ArticleHeader;
use tokio::sync::watch;

/// Append-only list of parsed headers, published as full snapshots.
///
/// Subscribers see the current snapshot right away and every later one.
/// A slow subscriber may skip intermediate snapshots but never observes one
/// out of order, since each snapshot extends the previous.
#[derive(Debug, Clone)]
pub struct ArticleCollection {
    tx: Arc<watch::Sender<Vec<ArticleHeader>>>,
}

impl Default for ArticleCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleCollection {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx: Arc::new(tx) }
    }

    /// Appends `header` and publishes the grown snapshot.
    pub fn push(&self, header: ArticleHeader) {
        self.tx.send_modify(|articles| articles.push(header));
    }

    pub fn snapshot(&self) -> Vec<ArticleHeader> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<ArticleHeader>> {
        self.tx.subscribe()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Article with exactly this title. When titles repeat, the most recently
    /// arrived one wins.
    pub fn find_by_title(&self, title: &str) -> Option<ArticleHeader> {
        self.tx
            .borrow()
            .iter()
            .rev()
            .find(|header| header.title == title)
            .cloned()
    }
}
