//! Helper functions shared by page rendering and static export

mod date;
mod text;
mod url;

pub use date::*;
pub use text::*;
pub use url::*;
