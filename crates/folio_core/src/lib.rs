pub mod config;
pub mod error;
pub mod header;
pub mod source;
pub mod types;

pub use config::BlogConfig;
pub use error::{Error, Result};
pub use header::{parse, HEADER_MARKER, SUMMARY_LENGTH};
pub use source::ContentSource;
pub use types::{ArticleHeader, TreeListing, TreeNode};
