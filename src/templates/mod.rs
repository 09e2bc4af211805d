//! Built-in news templates using the Tera template engine
//!
//! Templates are embedded in the binary so a site only needs content.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::content::html_escape;

/// Template renderer with the embedded news theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Text is escaped explicitly with `escape_text`; Tera's own escaping
        // would also rewrite `/` inside every href
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("news/layout.html")),
            ("home.html", include_str!("news/home.html")),
            ("article.html", include_str!("news/article.html")),
            ("tag.html", include_str!("news/tag.html")),
            ("not_found.html", include_str!("news/not_found.html")),
            (
                "partials/macros.html",
                include_str!("news/partials/macros.html"),
            ),
        ])?;

        tera.register_filter("escape_text", escape_text_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: HTML-escape text content and attribute values
fn escape_text_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_text", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "…".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub language: String,
    pub current_year: String,
    pub tags: Vec<TagLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagLink {
    pub name: String,
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleCard {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: String,
    pub display_date: String,
    pub image: Option<String>,
    pub path: String,
    pub primary_tag: Option<TagLink>,
    pub tags: Vec<TagLink>,
}

/// Document metadata rendered into `<head>`
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub og_title: String,
    pub description: String,
    pub canonical: Option<String>,
    pub og_type: String,
    pub published_time: Option<String>,
    pub authors: Vec<String>,
    pub images: Vec<String>,
    pub twitter_card: String,
}
