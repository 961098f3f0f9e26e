use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

pub const DEFAULT_API_HOST: &str = "https://api.github.com";
pub const DEFAULT_RAW_HOST: &str = "https://raw.githubusercontent.com";

/// Where the articles live: a directory on one branch of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogConfig {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Slash separated path of the article directory, e.g. `articles`.
    pub directory: String,
    pub api_host: String,
    pub raw_host: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            owner: "therealcain".to_string(),
            repo: "MyBlog".to_string(),
            branch: "master".to_string(),
            directory: "articles".to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            raw_host: DEFAULT_RAW_HOST.to_string(),
        }
    }
}

impl BlogConfig {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
            directory: directory.into(),
            ..Default::default()
        }
    }

    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    pub fn with_raw_host(mut self, host: impl Into<String>) -> Self {
        self.raw_host = host.into();
        self
    }

    /// Directory path split on `/`, empty pieces dropped.
    pub fn segments(&self) -> Vec<&str> {
        self.directory.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Listing endpoint of the branch root.
    pub fn tree_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/git/trees/{}",
            self.api_host.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.branch
        )
    }

    /// Raw-content URL of a file inside the article directory. The directory
    /// is taken from [`segments`](Self::segments), so it names the same
    /// location the walker lists.
    pub fn raw_url(&self, file_name: &str) -> String {
        let mut parts = vec![
            self.raw_host.trim_end_matches('/'),
            self.owner.as_str(),
            self.repo.as_str(),
            self.branch.as_str(),
        ];
        parts.extend(self.segments());
        parts.push(file_name);
        parts.join("/")
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("owner", &self.owner), ("repo", &self.repo), ("branch", &self.branch)] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{} must not be empty", name)));
            }
        }
        for host in [&self.api_host, &self.raw_host] {
            let url = Url::parse(host)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::InvalidUrl(format!("unsupported scheme in {}", host)));
            }
        }
        Ok(())
    }
}
