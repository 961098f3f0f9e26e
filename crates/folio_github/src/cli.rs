use std::sync::Arc;

use clap::{Args, Subcommand};
use folio_core::{ArticleHeader, BlogConfig, ContentSource, Error, Result};

use crate::fetcher::ArticleFetcher;
use crate::walker::DirectoryWalker;

#[derive(Args, Debug, Clone)]
pub struct ArticleArgs {
    #[command(subcommand)]
    pub command: ArticleCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArticleCommands {
    /// Load every article and print its header
    List {
        /// Sort by the header date, newest first. Undated articles go last.
        #[arg(long)]
        newest_first: bool,
    },
    /// Print articles as they arrive
    Watch,
    /// Print the body of the article with the given title
    Show {
        title: String,
    },
    /// Print the raw entries of the article directory
    Tree,
}

pub async fn handle_command(args: ArticleArgs, config: BlogConfig, source: Arc<dyn ContentSource>) -> Result<()> {
    match args.command {
        ArticleCommands::List { newest_first } => {
            let fetcher = ArticleFetcher::spawn(config, source);
            fetcher.finished().await;

            let mut articles = fetcher.snapshot();
            if newest_first {
                sort_newest_first(&mut articles);
            }
            println!("Found {} articles", articles.len());
            for article in &articles {
                println!("{}", format_article(article));
            }
        }
        ArticleCommands::Watch => {
            let fetcher = ArticleFetcher::spawn(config, source);
            let mut rx = fetcher.subscribe();
            let mut seen = 0;
            loop {
                tokio::select! {
                    changed = rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    _ = fetcher.finished() => break,
                }
                let snapshot = rx.borrow_and_update().clone();
                for article in &snapshot[seen..] {
                    println!("🆕 {}", format_article(article));
                }
                seen = snapshot.len();
            }
            for article in &fetcher.snapshot()[seen..] {
                println!("🆕 {}", format_article(article));
            }
        }
        ArticleCommands::Show { title } => {
            let fetcher = ArticleFetcher::spawn(config, source);
            fetcher.finished().await;

            let article = fetcher
                .collection()
                .find_by_title(&title)
                .ok_or_else(|| Error::NotFound(format!("No article titled {:?}", title)))?;
            let body = fetcher.fetch_body(&article.path).await?;
            println!("{}", body);
        }
        ArticleCommands::Tree => {
            let walker = DirectoryWalker::new(source);
            match walker.list_directory(&config).await? {
                Some(entries) => {
                    for entry in entries {
                        println!("{}", entry);
                    }
                }
                None => println!("Directory {:?} does not exist on {}", config.directory, config.branch),
            }
        }
    }
    Ok(())
}

pub fn format_article(article: &ArticleHeader) -> String {
    format!(
        "{} | {} | {} | {}",
        article.date,
        article.title,
        article.tags.join(","),
        article.path
    )
}

pub fn sort_newest_first(articles: &mut [ArticleHeader]) {
    articles.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
}
