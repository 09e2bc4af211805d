//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters escaped in a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Site-relative path of an article page
///
/// # Examples
/// ```ignore
/// article_path(&config, "ipl-final") // -> "/news/ipl-final"
/// ```
pub fn article_path(config: &SiteConfig, slug: &str) -> String {
    format!(
        "/{}/{}",
        config.news_dir.trim_matches('/'),
        encode_segment(slug)
    )
}

/// Site-relative path of a tag listing
///
/// # Examples
/// ```ignore
/// tag_path(&config, "world cup") // -> "/tag/world%20cup"
/// ```
pub fn tag_path(config: &SiteConfig, tag: &str) -> String {
    format!(
        "/{}/{}",
        config.tag_dir.trim_matches('/'),
        encode_segment(tag)
    )
}

/// Absolute URL for a site-relative path
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    format!(
        "{}/{}",
        config.url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
