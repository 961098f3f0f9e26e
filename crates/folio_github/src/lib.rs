pub mod cli;
pub mod client;
pub mod collection;
pub mod fetcher;
pub mod logging;
pub mod walker;

#[cfg(test)]
mod testing;

pub use cli::{handle_command, ArticleArgs, ArticleCommands};
pub use client::GithubClient;
pub use collection::ArticleCollection;
pub use fetcher::{fetch_article, ArticleFetcher};
pub use walker::{filter_markdowns, DirectoryWalker, ARTICLE_EXTENSION};

pub mod prelude {
    pub use super::{ArticleCollection, ArticleFetcher, DirectoryWalker, GithubClient};
    pub use folio_core::{ArticleHeader, BlogConfig, Error, Result};
}
