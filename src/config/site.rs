//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::StoreConfig;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub publisher: String,
    pub logo: String,
    pub language: String,

    // URL
    pub url: String,
    pub news_dir: String,
    pub tag_dir: String,

    // Directory
    pub content_dir: String,
    pub content_extension: String,
    pub static_dir: String,
    pub output_dir: String,

    // Loading
    pub skip_malformed: bool,

    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "RapidNews".to_string(),
            description: "Stay updated with the latest news, IPL cricket coverage, politics, entertainment, and more at RapidNews.".to_string(),
            publisher: "RapidNews".to_string(),
            logo: "/logo.png".to_string(),
            language: "en".to_string(),

            url: "https://rapidnews.com".to_string(),
            news_dir: "news".to_string(),
            tag_dir: "tag".to_string(),

            content_dir: "content".to_string(),
            content_extension: "mdx".to_string(),
            static_dir: "public".to_string(),
            output_dir: "out".to_string(),

            skip_malformed: false,

            highlight: HighlightConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Build the content store configuration rooted at `base_dir`
    pub fn store_config(&self, base_dir: &Path) -> StoreConfig {
        StoreConfig {
            content_dir: base_dir.join(&self.content_dir),
            extension: self.content_extension.trim_start_matches('.').to_string(),
            skip_malformed: self.skip_malformed,
        }
    }

    /// Resolve a configured directory against the site root
    pub fn resolve(&self, base_dir: &Path, dir: &str) -> PathBuf {
        base_dir.join(dir)
    }

    /// Logo as an absolute URL, for structured data
    pub fn logo_url(&self) -> String {
        if self.logo.starts_with("http://") || self.logo.starts_with("https://") {
            self.logo.clone()
        } else {
            format!(
                "{}/{}",
                self.url.trim_end_matches('/'),
                self.logo.trim_start_matches('/')
            )
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Development server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 3000,
        }
    }
}
