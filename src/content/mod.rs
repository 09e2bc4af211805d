//! Content module - reads articles and derives views over them

mod article;
mod frontmatter;
mod markdown;
mod query;
mod store;

pub use article::Article;
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use markdown::MarkdownRenderer;
pub(crate) use markdown::html_escape;
pub use query::ContentQuery;
pub use store::{is_valid_slug, ContentStore, StoreConfig};
