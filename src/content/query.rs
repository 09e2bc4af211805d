//! Query layer - derived views over the content store
//!
//! Every call rescans the store; nothing is cached between calls, so a
//! change on disk is visible to the next query.

use indexmap::IndexSet;
use std::collections::HashMap;

use super::{Article, ContentStore};
use crate::error::ContentResult;

/// Read-only queries used by the page renderers
#[derive(Debug, Clone, Copy)]
pub struct ContentQuery<'a> {
    store: &'a ContentStore,
}

impl<'a> ContentQuery<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        Self { store }
    }

    /// All articles, newest first
    pub fn list_all(&self) -> ContentResult<Vec<Article>> {
        self.store.list_all()
    }

    /// A single article, or `None` when no file matches
    pub fn get_by_slug(&self, slug: &str) -> Option<Article> {
        self.store.get_by_slug(slug)
    }

    /// Articles carrying `tag`, in `list_all` order
    pub fn by_tag(&self, tag: &str) -> ContentResult<Vec<Article>> {
        let articles = self.store.list_all()?;
        Ok(articles.into_iter().filter(|a| a.has_tag(tag)).collect())
    }

    /// Every distinct tag. Order follows first appearance in `list_all`.
    pub fn all_tags(&self) -> ContentResult<IndexSet<String>> {
        let articles = self.store.list_all()?;
        Ok(articles.into_iter().flat_map(|a| a.tags).collect())
    }

    /// Article count per tag, most used first
    pub fn tag_counts(&self) -> ContentResult<Vec<(String, usize)>> {
        let articles = self.store.list_all()?;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for article in &articles {
            let distinct: IndexSet<&String> = article.tags.iter().collect();
            for tag in distinct {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(counts)
    }
}
