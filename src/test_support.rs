//! Fixture helpers shared by unit tests

use std::fs;
use std::path::{Path, PathBuf};

/// Front-matter values for a fixture article
pub struct ArticleFixture {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub author: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub body: String,
}

impl ArticleFixture {
    pub fn new(title: &str, date: &str) -> Self {
        Self {
            title: title.to_string(),
            date: date.to_string(),
            excerpt: format!("Summary of {}", title),
            author: "Staff Reporter".to_string(),
            image: None,
            tags: Vec::new(),
            body: format!("Full story about {}.\n", title),
        }
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    fn render(&self) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!("title: {:?}\n", self.title));
        out.push_str(&format!("date: {:?}\n", self.date));
        out.push_str(&format!("excerpt: {:?}\n", self.excerpt));
        out.push_str(&format!("author: {:?}\n", self.author));
        if let Some(image) = &self.image {
            out.push_str(&format!("image: {:?}\n", image));
        }
        if !self.tags.is_empty() {
            out.push_str("tags:\n");
            for tag in &self.tags {
                out.push_str(&format!("  - {:?}\n", tag));
            }
        }
        out.push_str("---\n");
        out.push_str(&self.body);
        out
    }
}

/// Write `{slug}.mdx` into `dir`
pub fn write_article(dir: &Path, slug: &str, fixture: &ArticleFixture) -> PathBuf {
    let path = dir.join(format!("{}.mdx", slug));
    fs::write(&path, fixture.render()).unwrap();
    path
}
