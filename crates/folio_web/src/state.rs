use folio_github::ArticleFetcher;

pub struct AppState {
    pub fetcher: ArticleFetcher,
}

impl AppState {
    pub fn new(fetcher: ArticleFetcher) -> Self {
        Self { fetcher }
    }
}
