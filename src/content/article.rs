//! Article model

use serde::Serialize;

use super::FrontMatter;

/// A published news article
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// Source filename without its extension
    pub slug: String,

    /// Headline
    pub title: String,

    /// Publication date, compared lexically
    pub date: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Byline
    pub author: String,

    /// Cover image reference
    pub image: Option<String>,

    /// Tags in source order
    pub tags: Vec<String>,

    /// Raw Markdown/MDX body
    pub body: String,
}

impl Article {
    /// Build an article from parsed front-matter and the remaining body.
    /// Missing descriptive fields become empty strings.
    pub fn from_parts(slug: impl Into<String>, fm: FrontMatter, body: &str) -> Self {
        Self {
            slug: slug.into(),
            title: fm.title.unwrap_or_default(),
            date: fm.date.unwrap_or_default(),
            excerpt: fm.excerpt.unwrap_or_default(),
            author: fm.author.unwrap_or_default(),
            image: fm.image.filter(|image| !image.trim().is_empty()),
            tags: fm.tags,
            body: body.to_string(),
        }
    }

    /// Whether the article carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// First tag, used for breadcrumbs and section badges
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_defaults() {
        let article = Article::from_parts("quiet-day", FrontMatter::default(), "Nothing happened.");
        assert_eq!(article.slug, "quiet-day");
        assert_eq!(article.title, "");
        assert_eq!(article.date, "");
        assert!(article.tags.is_empty());
        assert_eq!(article.image, None);
        assert_eq!(article.body, "Nothing happened.");
        assert_eq!(article.primary_tag(), None);
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let fm = FrontMatter {
            tags: vec!["IPL".to_string(), "sports".to_string()],
            ..Default::default()
        };
        let article = Article::from_parts("final", fm, "");
        assert!(article.has_tag("IPL"));
        assert!(!article.has_tag("ipl"));
        assert_eq!(article.primary_tag(), Some("IPL"));
    }

    #[test]
    fn test_blank_image_is_absent() {
        let fm = FrontMatter {
            image: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(Article::from_parts("x", fm, "").image, None);
    }
}
