//! Content store - reads articles from the content directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Article, FrontMatter};
use crate::error::{ContentError, ContentResult};

/// Where and how the store reads articles
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Flat directory holding one file per article
    pub content_dir: PathBuf,
    /// Recognized file extension, without the dot
    pub extension: String,
    /// Skip and log files with malformed front-matter instead of failing
    pub skip_malformed: bool,
}

impl StoreConfig {
    /// Store over `content_dir` reading `.mdx` files
    pub fn new<P: Into<PathBuf>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.into(),
            extension: "mdx".to_string(),
            skip_malformed: false,
        }
    }
}

/// Reads articles from disk on every call
#[derive(Debug, Clone)]
pub struct ContentStore {
    config: StoreConfig,
}

impl ContentStore {
    /// Create a new content store
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Load every article, newest first
    pub fn list_all(&self) -> ContentResult<Vec<Article>> {
        let dir = &self.config.content_dir;
        ensure_directory(dir)?;

        let mut articles = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(ContentError::StoreUnavailable {
                        path: dir.clone(),
                        source: err.into(),
                    });
                }
                Err(err) => {
                    // A dangling link or unreadable entry only matters if it would be listed
                    let path = err.path().map(Path::to_path_buf);
                    match path {
                        Some(path) if self.slug_for(&path).is_some() => {
                            return Err(ContentError::Io {
                                path,
                                source: err.into(),
                            });
                        }
                        _ => {
                            tracing::debug!("Ignoring unreadable entry: {}", err);
                            continue;
                        }
                    }
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(slug) = self.slug_for(path) else {
                continue;
            };

            match load_article(path, slug) {
                Ok(article) => articles.push(article),
                Err(ContentError::MalformedContent { path, message })
                    if self.config.skip_malformed =>
                {
                    tracing::warn!("Skipping {:?}: {}", path, message);
                }
                Err(e) => return Err(e),
            }
        }

        // Newest first; the sort is stable so equal dates keep filename order
        articles.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} articles from {:?}", articles.len(), dir);
        Ok(articles)
    }

    /// Load the article stored as `{slug}.{extension}`, if there is one
    pub fn get_by_slug(&self, slug: &str) -> Option<Article> {
        if !is_valid_slug(slug) {
            tracing::debug!("Rejected slug {:?}", slug);
            return None;
        }

        let path = self
            .config
            .content_dir
            .join(format!("{}.{}", slug, self.config.extension));

        match load_article(&path, slug) {
            Ok(article) => Some(article),
            Err(ContentError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No article for slug {:?}", slug);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to load article {:?}: {}", slug, e);
                None
            }
        }
    }

    /// Slug for a path in the content directory, or `None` if the file is
    /// not an article
    fn slug_for<'p>(&self, path: &'p Path) -> Option<&'p str> {
        let extension = path.extension().and_then(|e| e.to_str())?;
        if extension != self.config.extension {
            return None;
        }
        let stem = path.file_stem().and_then(|s| s.to_str())?;
        is_valid_slug(stem).then_some(stem)
    }
}

/// A slug names exactly one file inside the content directory
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.starts_with('.') && !slug.contains(['/', '\\', '\0'])
}

fn ensure_directory(dir: &Path) -> ContentResult<()> {
    let unavailable = |source| ContentError::StoreUnavailable {
        path: dir.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(dir).map_err(unavailable)?;
    if !metadata.is_dir() {
        return Err(unavailable(io::Error::new(
            io::ErrorKind::Other,
            "not a directory",
        )));
    }
    Ok(())
}

fn load_article(path: &Path, slug: &str) -> ContentResult<Article> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (fm, body) = FrontMatter::parse(&content).map_err(|e| ContentError::malformed(path, e))?;

    Ok(Article::from_parts(slug, fm, body))
}
