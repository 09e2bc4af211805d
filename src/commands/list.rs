//! List site content

use anyhow::Result;

use crate::content::ContentQuery;
use crate::RapidNews;

/// List site content by type
pub fn run(app: &RapidNews, content_type: &str) -> Result<()> {
    for line in render(app, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

fn render(app: &RapidNews, content_type: &str) -> Result<Vec<String>> {
    let store = app.store();
    let query = ContentQuery::new(&store);
    let mut lines = Vec::new();

    match content_type {
        "post" | "posts" | "article" | "articles" => {
            let articles = query.list_all()?;
            lines.push(format!("Articles ({}):", articles.len()));
            for article in articles {
                lines.push(format!(
                    "  {} - {} [{}]",
                    article.date, article.title, article.slug
                ));
            }
        }
        "tag" | "tags" => {
            let tags = query.tag_counts()?;
            lines.push(format!("Tags ({}):", tags.len()));
            for (tag, count) in tags {
                lines.push(format!("  {} ({})", tag, count));
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(lines)
}
