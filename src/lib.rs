//! rapidnews: the content layer and renderer for a Markdown news site
//!
//! Articles live as front-matter documents in a flat content directory.
//! This crate reads them on demand, answers listing, lookup and tag
//! queries, and renders the result either live over HTTP or as a static
//! export.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod pages;
pub mod server;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::content::ContentStore;

/// The main application: a site rooted at one base directory
#[derive(Clone)]
pub struct RapidNews {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the article files
    pub content_dir: PathBuf,
    /// Static assets served and copied as-is
    pub static_dir: PathBuf,
    /// Static export target
    pub output_dir: PathBuf,
}

impl RapidNews {
    /// Create a new site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load {:?}", config_path))?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = config.resolve(&base_dir, &config.content_dir);
        let static_dir = config.resolve(&base_dir, &config.static_dir);
        let output_dir = config.resolve(&base_dir, &config.output_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            static_dir,
            output_dir,
        })
    }

    /// A content store over this site's content directory
    pub fn store(&self) -> ContentStore {
        ContentStore::new(self.config.store_config(&self.base_dir))
    }

    /// Export the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Remove the export directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Scaffold a new article
    pub fn new_article(&self, title: &str, author: Option<&str>, tags: &[String]) -> Result<PathBuf> {
        commands::new::create_article(self, title, author, tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let app = RapidNews::new(dir.path()).unwrap();
        assert_eq!(app.content_dir, dir.path().join("content"));
        assert_eq!(app.static_dir, dir.path().join("public"));
        assert_eq!(app.output_dir, dir.path().join("out"));
        assert_eq!(app.store().config().extension, "mdx");
    }

    #[test]
    fn test_new_with_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "title: Daily Wire\ncontent_dir: articles\ncontent_extension: .md\n",
        )
        .unwrap();

        let app = RapidNews::new(dir.path()).unwrap();
        assert_eq!(app.config.title, "Daily Wire");
        assert_eq!(app.content_dir, dir.path().join("articles"));
        assert_eq!(app.store().config().extension, "md");
    }

    #[test]
    fn test_new_with_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: [unclosed\n").unwrap();
        assert!(RapidNews::new(dir.path()).is_err());
    }
}
