//! Page rendering - turns query results into HTML documents
//!
//! Both the HTTP server and the static generator go through [`Pages`], so a
//! route renders the same markup whichever way it is published.

use anyhow::Result;
use chrono::Datelike;
use serde_json::json;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::{Article, ContentQuery, MarkdownRenderer};
use crate::helpers::{article_path, capitalize_first, display_date, full_url_for, tag_path};
use crate::templates::{ArticleCard, PageMeta, SiteData, TagLink, TemplateRenderer};

/// Last-resort body when even the error page cannot be rendered
pub const INTERNAL_ERROR_HTML: &str = "<!DOCTYPE html><html><head><title>Something went wrong</title></head><body><h1>Something went wrong</h1><p>Please try again later.</p></body></html>";

/// Renders every page of the site
pub struct Pages {
    config: SiteConfig,
    markdown: MarkdownRenderer,
    templates: TemplateRenderer,
}

impl Pages {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let markdown = MarkdownRenderer::with_options(&config.highlight);
        let templates = TemplateRenderer::new()?;
        Ok(Self {
            config,
            markdown,
            templates,
        })
    }

    /// Front page: the newest article as lead story, the rest below
    pub fn home(&self, query: &ContentQuery) -> Result<String> {
        let articles = query.list_all()?;
        let tags = query.all_tags()?;

        let mut cards = articles.iter().map(|a| self.card(a));
        let lead = cards.next();
        let rest: Vec<_> = cards.collect();

        let meta = PageMeta {
            title: format!("{} - Latest News", self.config.title),
            og_title: self.config.title.clone(),
            description: self.config.description.clone(),
            canonical: Some(full_url_for(&self.config, "/")),
            og_type: "website".to_string(),
            published_time: None,
            authors: Vec::new(),
            images: Vec::new(),
            twitter_card: "summary".to_string(),
        };

        let mut context = self.base_context(tags.iter().map(String::as_str), &meta);
        context.insert("lead", &lead);
        context.insert("articles", &rest);

        self.templates.render("home.html", &context)
    }

    /// Article page, or `None` when no article has this slug
    pub fn article(&self, query: &ContentQuery, slug: &str) -> Result<Option<String>> {
        let Some(article) = query.get_by_slug(slug) else {
            return Ok(None);
        };
        let tags = query.all_tags()?;

        let body = self.markdown.render(&article.body)?;
        let canonical = full_url_for(&self.config, &article_path(&self.config, &article.slug));

        let meta = PageMeta {
            title: format!("{} - {}", article.title, self.config.title),
            og_title: article.title.clone(),
            description: article.excerpt.clone(),
            canonical: Some(canonical),
            og_type: "article".to_string(),
            published_time: Some(article.date.clone()),
            authors: vec![article.author.clone()],
            images: article.image.iter().cloned().collect(),
            twitter_card: "summary_large_image".to_string(),
        };

        let json_ld = article_json_ld(&self.config, &article);

        let mut context = self.base_context(tags.iter().map(String::as_str), &meta);
        context.insert("article", &self.card(&article));
        context.insert("body", &body);
        context.insert("json_ld", &script_safe(&json_ld.to_string()));

        self.templates.render("article.html", &context).map(Some)
    }

    /// Tag listing, or `None` when no article carries the tag
    pub fn tag(&self, query: &ContentQuery, tag: &str) -> Result<Option<String>> {
        let articles = query.by_tag(tag)?;
        if articles.is_empty() {
            return Ok(None);
        }
        let tags = query.all_tags()?;

        let heading = format!("{} News", capitalize_first(tag));
        let title = format!("{} - {}", heading, self.config.title);
        let meta = PageMeta {
            og_title: title.clone(),
            title,
            description: format!("Latest news and articles about {}.", tag),
            canonical: Some(full_url_for(&self.config, &tag_path(&self.config, tag))),
            og_type: "website".to_string(),
            published_time: None,
            authors: Vec::new(),
            images: Vec::new(),
            twitter_card: "summary".to_string(),
        };

        let cards: Vec<_> = articles.iter().map(|a| self.card(a)).collect();

        let mut context = self.base_context(tags.iter().map(String::as_str), &meta);
        context.insert("heading", &heading);
        context.insert("articles", &cards);

        self.templates.render("tag.html", &context).map(Some)
    }

    /// Not-found page. Navigation is best effort: a broken store still gets
    /// a 404 page, just without tag links.
    pub fn not_found(&self, query: &ContentQuery) -> Result<String> {
        let tags = query.all_tags().unwrap_or_else(|e| {
            tracing::warn!("Rendering 404 page without navigation: {}", e);
            Default::default()
        });

        let meta = PageMeta {
            title: format!("Page Not Found - {}", self.config.title),
            og_title: "Page Not Found".to_string(),
            description: "The requested page could not be found.".to_string(),
            canonical: None,
            og_type: "website".to_string(),
            published_time: None,
            authors: Vec::new(),
            images: Vec::new(),
            twitter_card: "summary".to_string(),
        };

        let context = self.base_context(tags.iter().map(String::as_str), &meta);
        self.templates.render("not_found.html", &context)
    }

    fn base_context<'t>(&self, tags: impl Iterator<Item = &'t str>, meta: &PageMeta) -> Context {
        let site = SiteData {
            title: self.config.title.clone(),
            language: self.config.language.clone(),
            current_year: chrono::Local::now().year().to_string(),
            tags: tags.map(|t| self.tag_link(t)).collect(),
        };

        let mut context = Context::new();
        context.insert("site", &site);
        context.insert("meta", meta);
        context
    }

    fn tag_link(&self, tag: &str) -> TagLink {
        TagLink {
            name: tag.to_string(),
            label: capitalize_first(tag),
            path: tag_path(&self.config, tag),
        }
    }

    fn card(&self, article: &Article) -> ArticleCard {
        ArticleCard {
            slug: article.slug.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            author: article.author.clone(),
            date: article.date.clone(),
            display_date: display_date(&article.date),
            image: article.image.clone(),
            path: article_path(&self.config, &article.slug),
            primary_tag: article.primary_tag().map(|t| self.tag_link(t)),
            tags: article.tags.iter().map(|t| self.tag_link(t)).collect(),
        }
    }
}

/// schema.org `NewsArticle` structured data for an article page
pub fn article_json_ld(config: &SiteConfig, article: &Article) -> serde_json::Value {
    let url = full_url_for(config, &article_path(config, &article.slug));
    let images: Vec<&str> = article.image.as_deref().into_iter().collect();

    json!({
        "@context": "https://schema.org",
        "@type": "NewsArticle",
        "headline": article.title,
        "description": article.excerpt,
        "image": images,
        "datePublished": article.date,
        "dateModified": article.date,
        "author": {
            "@type": "Person",
            "name": article.author,
        },
        "publisher": {
            "@type": "Organization",
            "name": config.publisher,
            "logo": {
                "@type": "ImageObject",
                "url": config.logo_url(),
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
        "keywords": article.tags.join(", "),
    })
}

/// Keep serialized JSON from closing the surrounding `<script>` element
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
