use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use folio_core::{ArticleHeader, BlogConfig, ContentSource, Result};
use futures::future::join_all;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::collection::ArticleCollection;
use crate::walker::DirectoryWalker;

/// Builds the article list for one configured directory.
///
/// [`ArticleFetcher::spawn`] starts the pipeline in the background and returns
/// at once: the directory is listed, then every article file is fetched and
/// parsed in its own task. Each success appends to [`ArticleCollection`], so
/// the list grows in completion order. Failures drop the affected file and are
/// only logged. There is no retry and no way to cancel the pipeline.
///
/// Snapshots from [`subscribe`](Self::subscribe) go through a `watch` channel,
/// which keeps only the latest value. Pushes that land before a subscriber
/// polls arrive as one change, so a slow subscriber can skip intermediate
/// lengths. Every snapshot holds the whole list so far; no article is lost.
#[derive(Clone)]
pub struct ArticleFetcher {
    config: Arc<BlogConfig>,
    source: Arc<dyn ContentSource>,
    collection: ArticleCollection,
    in_flight: Arc<AtomicUsize>,
    done: watch::Receiver<bool>,
}

impl ArticleFetcher {
    /// Must be called from within a tokio runtime.
    pub fn spawn(config: BlogConfig, source: Arc<dyn ContentSource>) -> Self {
        let config = Arc::new(config);
        let collection = ArticleCollection::new();
        let in_flight = Arc::new(AtomicUsize::new(0));
        let (done_tx, done) = watch::channel(false);

        tokio::spawn(run_pipeline(
            config.clone(),
            source.clone(),
            collection.clone(),
            in_flight.clone(),
            done_tx,
        ));

        Self {
            config,
            source,
            collection,
            in_flight,
            done,
        }
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    pub fn collection(&self) -> &ArticleCollection {
        &self.collection
    }

    pub fn snapshot(&self) -> Vec<ArticleHeader> {
        self.collection.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<ArticleHeader>> {
        self.collection.subscribe()
    }

    /// Article fetches started but not yet settled.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        *self.done.borrow()
    }

    /// Waits until the listing and every article fetch have settled.
    pub async fn finished(&self) {
        let mut done = self.done.clone();
        // Err only if the pipeline task died, in which case nothing is left to wait for.
        let _ = done.wait_for(|finished| *finished).await;
    }

    /// Fetches the article at `path` and returns its body without the header.
    pub async fn fetch_body(&self, path: &str) -> Result<String> {
        let text = self.source.fetch_text(path).await?;
        Ok(folio_core::parse(&text).content)
    }
}

/// Fetches and parses one article, recording where it came from.
pub async fn fetch_article(source: &dyn ContentSource, url: &str) -> Result<ArticleHeader> {
    let text = source.fetch_text(url).await?;
    let mut header = folio_core::parse(&text);
    header.path = url.to_string();
    Ok(header)
}

async fn run_pipeline(
    config: Arc<BlogConfig>,
    source: Arc<dyn ContentSource>,
    collection: ArticleCollection,
    in_flight: Arc<AtomicUsize>,
    done: watch::Sender<bool>,
) {
    let walker = DirectoryWalker::new(source.clone());
    let names = walker.list_markdowns(&config).await;
    info!("🗂️ Found {} articles in {}/{}/{}", names.len(), config.owner, config.repo, config.directory);

    in_flight.fetch_add(names.len(), Ordering::SeqCst);
    let tasks: Vec<_> = names
        .into_iter()
        .map(|name| {
            let url = config.raw_url(&name);
            let source = source.clone();
            let collection = collection.clone();
            let in_flight = in_flight.clone();
            tokio::spawn(async move {
                match fetch_article(source.as_ref(), &url).await {
                    Ok(header) => {
                        info!("📰 Loaded article: {}", header.title);
                        collection.push(header);
                    }
                    Err(e) => warn!("⚠️ Failed to fetch {}: {}", url, e),
                }
                in_flight.fetch_sub(1, Ordering::SeqCst);
            })
        })
        .collect();

    for result in join_all(tasks).await {
        if let Err(e) = result {
            warn!("⚠️ Article task aborted: {}", e);
        }
    }

    info!("✅ Article list complete: {} loaded", collection.len());
    done.send_replace(true);
}
