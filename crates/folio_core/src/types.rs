use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout authors use in the `date` header field.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Metadata and body extracted from one article file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleHeader {
    /// Raw-content URL the article was fetched from.
    pub path: String,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub content: String,
}

impl ArticleHeader {
    /// Interprets `date` as `DD/MM/YYYY`.
    ///
    /// The field is free text, so anything that does not match yields `None`
    /// and the raw string is left for display as-is.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}

/// One entry of a git tree listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub path: String,
    /// Listing endpoint for this node's own children. Submodule entries
    /// come without one and decode to an empty string.
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Body of a `git/trees` response. Fields other than `tree` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeListing {
    #[serde(default)]
    pub tree: Vec<TreeNode>,
}

impl TreeListing {
    /// Finds the node whose `path` equals `segment` exactly.
    pub fn find(&self, segment: &str) -> Option<&TreeNode> {
        self.tree.iter().find(|node| node.path == segment)
    }

    pub fn paths(&self) -> Vec<String> {
        self.tree.iter().map(|node| node.path.clone()).collect()
    }
}
