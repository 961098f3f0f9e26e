use std::sync::Arc;

use folio_core::{BlogConfig, ContentSource, Result};
use tracing::{debug, warn};

/// Extension of the files treated as articles. Matched case-sensitively.
pub const ARTICLE_EXTENSION: &str = ".md";

/// Resolves a directory inside a repository tree one segment at a time.
#[derive(Clone)]
pub struct DirectoryWalker {
    source: Arc<dyn ContentSource>,
}

impl DirectoryWalker {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Entry names of the configured directory.
    ///
    /// Returns `Ok(None)` when a segment does not exist; no request is made
    /// for the segments after it. Transport and decoding failures are errors.
    /// An empty directory path lists the branch root.
    pub async fn list_directory(&self, config: &BlogConfig) -> Result<Option<Vec<String>>> {
        self.walk(&config.tree_url(), &config.segments()).await
    }

    /// Each level's URL comes from the previous level's response, so the
    /// requests are strictly sequential.
    pub async fn walk(&self, root_url: &str, segments: &[&str]) -> Result<Option<Vec<String>>> {
        let mut url = root_url.to_string();
        for segment in segments {
            let listing = self.source.fetch_tree(&url).await?;
            match listing.find(segment) {
                Some(node) if !node.url.is_empty() => url = node.url.clone(),
                Some(_) => {
                    debug!("Segment {:?} under {} has no listing url", segment, url);
                    return Ok(None);
                }
                None => {
                    debug!("Segment {:?} not found under {}", segment, url);
                    return Ok(None);
                }
            }
        }
        let listing = self.source.fetch_tree(&url).await?;
        Ok(Some(listing.paths()))
    }

    /// Article file names in the configured directory.
    ///
    /// Never fails: an unresolved directory or a failed request yields an
    /// empty list.
    pub async fn list_markdowns(&self, config: &BlogConfig) -> Vec<String> {
        match self.list_directory(config).await {
            Ok(Some(entries)) => filter_markdowns(entries),
            Ok(None) => {
                warn!("⚠️ Directory {:?} not found in {}/{}", config.directory, config.owner, config.repo);
                Vec::new()
            }
            Err(e) => {
                warn!("⚠️ Failed to list {:?}: {}", config.directory, e);
                Vec::new()
            }
        }
    }
}

pub fn filter_markdowns(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|name| name.ends_with(ARTICLE_EXTENSION))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSource;

    const ROOT: &str = "mock://root";

    fn walker(source: &Arc<MockSource>) -> DirectoryWalker {
        DirectoryWalker::new(source.clone())
    }

    #[test]
    fn test_filter_markdowns_is_case_sensitive() {
        let entries = vec!["readme.txt".to_string(), "post1.md".to_string(), "post2.MD".to_string()];
        assert_eq!(filter_markdowns(entries), vec!["post1.md"]);
    }

    #[tokio::test]
    async fn test_walk_nested_segments() {
        let source = Arc::new(
            MockSource::new()
                .with_tree(ROOT, &[("a", "mock://a"), ("other", "mock://other")])
                .with_tree("mock://a", &[("b", "mock://b")])
                .with_tree("mock://b", &[("one.md", "mock://1"), ("two.txt", "mock://2")]),
        );
        let entries = walker(&source).walk(ROOT, &["a", "b"]).await.unwrap();
        assert_eq!(entries, Some(vec!["one.md".to_string(), "two.txt".to_string()]));
        assert_eq!(source.requests(), vec![ROOT, "mock://a", "mock://b"]);
    }

    #[tokio::test]
    async fn test_missing_inner_segment_is_absent() {
        let source = Arc::new(
            MockSource::new()
                .with_tree(ROOT, &[("a", "mock://a")])
                .with_tree("mock://a", &[("c", "mock://c")]),
        );
        let entries = walker(&source).walk(ROOT, &["a", "b"]).await.unwrap();
        assert_eq!(entries, None);
        assert_eq!(source.requests(), vec![ROOT, "mock://a"]);
    }

    #[tokio::test]
    async fn test_missing_first_segment_short_circuits() {
        let source = Arc::new(MockSource::new().with_tree(ROOT, &[("x", "mock://x")]));
        let entries = walker(&source).walk(ROOT, &["a", "b", "c"]).await.unwrap();
        assert_eq!(entries, None);
        assert_eq!(source.requests(), vec![ROOT]);
    }

    #[tokio::test]
    async fn test_sibling_without_url_is_ignored() {
        let source = Arc::new(
            MockSource::new()
                .with_tree(ROOT, &[("vendor-lib", ""), ("articles", "mock://articles")])
                .with_tree("mock://articles", &[("post.md", "mock://p")]),
        );
        let entries = walker(&source).walk(ROOT, &["articles"]).await.unwrap();
        assert_eq!(entries, Some(vec!["post.md".to_string()]));
    }

    #[tokio::test]
    async fn test_matched_node_without_url_is_absent() {
        let source = Arc::new(MockSource::new().with_tree(ROOT, &[("vendor-lib", "")]));
        let entries = walker(&source).walk(ROOT, &["vendor-lib"]).await.unwrap();
        assert_eq!(entries, None);
        assert_eq!(source.requests(), vec![ROOT]);
    }

    #[tokio::test]
    async fn test_segment_match_is_exact() {
        let source = Arc::new(MockSource::new().with_tree(ROOT, &[("Articles", "mock://a")]));
        let entries = walker(&source).walk(ROOT, &["articles"]).await.unwrap();
        assert_eq!(entries, None);
    }

    #[tokio::test]
    async fn test_empty_path_lists_root() {
        let source = Arc::new(MockSource::new().with_tree(ROOT, &[("README.md", "mock://r")]));
        let entries = walker(&source).walk(ROOT, &[]).await.unwrap();
        assert_eq!(entries, Some(vec!["README.md".to_string()]));
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let source = Arc::new(MockSource::new().with_tree(ROOT, &[("a", "mock://a")]));
        let result = walker(&source).walk(ROOT, &["a"]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_markdowns_recovers() {
        let config = BlogConfig::default().with_api_host("mock://api");
        let root = config.tree_url();

        // listing request fails outright
        let source = Arc::new(MockSource::new());
        assert!(walker(&source).list_markdowns(&config).await.is_empty());

        // directory is missing
        let source = Arc::new(MockSource::new().with_tree(&root, &[("drafts", "mock://d")]));
        assert!(walker(&source).list_markdowns(&config).await.is_empty());

        let source = Arc::new(
            MockSource::new()
                .with_tree(&root, &[("articles", "mock://articles")])
                .with_tree("mock://articles", &[("a.md", "mock://1"), ("b.txt", "mock://2"), ("c.md", "mock://3")]),
        );
        assert_eq!(walker(&source).list_markdowns(&config).await, vec!["a.md", "c.md"]);
    }
}
