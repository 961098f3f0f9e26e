use clap::Parser;
use folio_core::{BlogConfig, ContentSource, Result};
use folio_github::{ArticleArgs, ArticleFetcher, GithubClient};
use folio_web::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Article index for a GitHub hosted blog", long_about = None)]
pub struct Cli {
    /// Owner of the repository holding the articles
    #[arg(long, default_value_t = BlogConfig::default().owner)]
    owner: String,
    #[arg(long, default_value_t = BlogConfig::default().repo)]
    repo: String,
    #[arg(long, default_value_t = BlogConfig::default().branch)]
    branch: String,
    /// Article directory inside the repository, e.g. articles or blog/posts
    #[arg(long, default_value_t = BlogConfig::default().directory)]
    directory: String,
    #[arg(long, default_value_t = BlogConfig::default().api_host)]
    api_host: String,
    #[arg(long, default_value_t = BlogConfig::default().raw_host)]
    raw_host: String,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Inspect the article list
    Articles(ArticleArgs),
    /// Serve the article list over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

impl Cli {
    fn config(&self) -> BlogConfig {
        BlogConfig::new(&self.owner, &self.repo, &self.branch, &self.directory)
            .with_api_host(&self.api_host)
            .with_raw_host(&self.raw_host)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    folio_github::logging::init_logging(cli.verbose);

    let config = cli.config();
    config.validate()?;
    info!("📚 Using {}/{}@{} ({})", config.owner, config.repo, config.branch, config.directory);

    let source: Arc<dyn ContentSource> = Arc::new(GithubClient::new()?);

    match cli.command {
        Commands::Articles(args) => folio_github::handle_command(args, config, source).await?,
        Commands::Serve { addr } => {
            let fetcher = ArticleFetcher::spawn(config, source);
            folio_web::serve(AppState::new(fetcher), addr).await?;
        }
    }

    Ok(())
}
