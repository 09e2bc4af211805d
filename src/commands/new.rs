//! Create a new article

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::is_valid_slug;
use crate::helpers::today;
use crate::RapidNews;

/// Scaffold a new article named after its slugified title
pub fn create_article(
    app: &RapidNews,
    title: &str,
    author: Option<&str>,
    tags: &[String],
) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if !is_valid_slug(&slug) {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let content_dir = &app.content_dir;
    fs::create_dir_all(content_dir)?;

    let store = app.store();
    let file_path = content_dir.join(format!("{}.{}", slug, store.config().extension));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, scaffold(title, author, tags)?)?;
    println!("Created: {:?}", file_path);

    Ok(file_path)
}

fn scaffold(title: &str, author: Option<&str>, tags: &[String]) -> Result<String> {
    let mut front = serde_yaml::Mapping::new();
    front.insert("title".into(), title.into());
    front.insert("date".into(), today().into());
    front.insert("excerpt".into(), "".into());
    front.insert("author".into(), author.unwrap_or_default().into());
    front.insert(
        "tags".into(),
        serde_yaml::Value::Sequence(tags.iter().map(|t| t.as_str().into()).collect()),
    );

    let yaml = serde_yaml::to_string(&front)?;
    Ok(format!("---\n{}---\n\n", yaml))
}
