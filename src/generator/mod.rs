//! Generator module - exports every route as a static HTML file

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::{ContentQuery, ContentStore};
use crate::pages::Pages;
use crate::RapidNews;

/// Counts reported after a static export
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateStats {
    pub articles: usize,
    pub tags: usize,
    pub assets: usize,
}

/// Static site generator
pub struct Generator {
    app: RapidNews,
    store: ContentStore,
    pages: Pages,
}

impl Generator {
    /// Create a new generator
    pub fn new(app: &RapidNews) -> Result<Self> {
        Ok(Self {
            app: app.clone(),
            store: app.store(),
            pages: Pages::new(app.config.clone())?,
        })
    }

    /// Generate the entire site into the output directory
    pub fn generate(&self) -> Result<GenerateStats> {
        let query = ContentQuery::new(&self.store);
        let out = &self.app.output_dir;
        fs::create_dir_all(out)?;

        let mut stats = GenerateStats {
            assets: self.copy_static_assets()?,
            ..Default::default()
        };

        write_page(&out.join("index.html"), &self.pages.home(&query)?)?;

        let articles = query.list_all()?;
        let news_dir = out.join(self.app.config.news_dir.trim_matches('/'));
        for article in &articles {
            let Some(html) = self.pages.article(&query, &article.slug)? else {
                // Removed or broken between listing and lookup
                tracing::warn!("Article {:?} disappeared during export", article.slug);
                continue;
            };
            write_page(&news_dir.join(&article.slug).join("index.html"), &html)?;
            stats.articles += 1;
        }

        let tag_dir = out.join(self.app.config.tag_dir.trim_matches('/'));
        for tag in query.all_tags()? {
            if !is_path_segment(&tag) {
                tracing::warn!("Skipping tag {:?}: not usable as a directory name", tag);
                continue;
            }
            if let Some(html) = self.pages.tag(&query, &tag)? {
                write_page(&tag_dir.join(&tag).join("index.html"), &html)?;
                stats.tags += 1;
            }
        }

        write_page(&out.join("404.html"), &self.pages.not_found(&query)?)?;

        tracing::info!(
            "Generated {} articles and {} tag pages into {:?}",
            stats.articles,
            stats.tags,
            out
        );
        Ok(stats)
    }

    /// Copy everything under the static directory into the output directory
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.app.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir).unwrap_or(path);
            let dest = self.app.output_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)
                .with_context(|| format!("Failed to copy {:?} to {:?}", path, dest))?;
            copied += 1;
        }

        tracing::debug!("Copied {} static assets", copied);
        Ok(copied)
    }
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create dir {:?}", parent))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!("Generated: {:?}", path);
    Ok(())
}

/// Whether a tag can name a single output directory
fn is_path_segment(tag: &str) -> bool {
    !tag.trim().is_empty() && !tag.starts_with('.') && !tag.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_article, ArticleFixture};

    fn site() -> (tempfile::TempDir, RapidNews) {
        let root = tempfile::tempdir().unwrap();
        let content = root.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::create_dir_all(root.path().join("public/images")).unwrap();
        fs::write(root.path().join("public/images/cover.jpg"), b"jpg").unwrap();

        write_article(
            &content,
            "rate-cut",
            &ArticleFixture::new("Central Bank Cuts Rates", "2025-03-03")
                .tags(&["business", "economy"]),
        );
        write_article(
            &content,
            "chip-plant",
            &ArticleFixture::new("New Chip Plant Opens", "2025-03-01").tags(&["tech", "business"]),
        );
        write_article(
            &content,
            "odd-tag",
            &ArticleFixture::new("Odd tag", "2025-01-01").tags(&["a/b"]),
        );

        let app = RapidNews::new(root.path()).unwrap();
        (root, app)
    }

    #[test]
    fn test_generate_writes_every_route() {
        let (_root, app) = site();
        let stats = Generator::new(&app).unwrap().generate().unwrap();

        assert_eq!(stats.articles, 3);
        assert_eq!(stats.tags, 3);
        assert_eq!(stats.assets, 1);

        let out = &app.output_dir;
        assert!(out.join("index.html").is_file());
        assert!(out.join("404.html").is_file());
        assert!(out.join("news/rate-cut/index.html").is_file());
        assert!(out.join("news/chip-plant/index.html").is_file());
        assert!(out.join("tag/business/index.html").is_file());
        assert!(out.join("tag/economy/index.html").is_file());
        assert!(out.join("tag/tech/index.html").is_file());
        assert!(!out.join("tag/a").exists());
        assert!(out.join("images/cover.jpg").is_file());

        let tag_page = fs::read_to_string(out.join("tag/business/index.html")).unwrap();
        assert!(tag_page.contains("Central Bank Cuts Rates"));
        assert!(tag_page.contains("New Chip Plant Opens"));
    }

    #[test]
    fn test_generate_fails_without_content() {
        let (_root, app) = site();
        fs::remove_dir_all(&app.content_dir).unwrap();
        assert!(Generator::new(&app).unwrap().generate().is_err());
    }

    #[test]
    fn test_is_path_segment() {
        assert!(is_path_segment("ipl"));
        assert!(is_path_segment("world cup"));
        assert!(!is_path_segment("a/b"));
        assert!(!is_path_segment(".."));
        assert!(!is_path_segment(" "));
    }
}
