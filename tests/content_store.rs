//! Content queries exercised through the public API against fixture directories

use std::fs;
use std::path::Path;

use rapidnews::content::{ContentQuery, ContentStore, StoreConfig};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn article(title: &str, date: &str, tags: &[&str]) -> String {
    let mut out = format!("---\ntitle: {title:?}\ndate: {date:?}\n");
    if !tags.is_empty() {
        out.push_str(&format!("tags: [{}]\n", tags.join(", ")));
    }
    out.push_str("---\nBody text.\n");
    out
}

fn newsroom() -> (tempfile::TempDir, ContentStore) {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "budget.mdx", &article("Budget", "2024-02-01", &["economy", "politics"]));
    write(dir.path(), "derby.mdx", &article("Derby", "2024-03-01", &["sport"]));
    write(dir.path(), "summit.mdx", &article("Summit", "2024-01-01", &["politics"]));
    write(dir.path(), "weather.mdx", &article("Weather", "2024-01-15", &[]));
    let store = ContentStore::new(StoreConfig::new(dir.path()));
    (dir, store)
}

#[test]
fn list_all_has_one_article_per_file_newest_first() {
    let (_dir, store) = newsroom();
    let articles = ContentQuery::new(&store).list_all().unwrap();

    let slugs: Vec<_> = articles.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["derby", "budget", "weather", "summit"]);
    assert!(articles.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn list_all_orders_three_dates() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.mdx", &article("A", "2024-03-01", &[]));
    write(dir.path(), "b.mdx", &article("B", "2024-01-01", &[]));
    write(dir.path(), "c.mdx", &article("C", "2024-02-01", &[]));
    let store = ContentStore::new(StoreConfig::new(dir.path()));

    let dates: Vec<_> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|a| a.date)
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
}

#[test]
fn by_tag_is_a_filtered_subsequence() {
    let (_dir, store) = newsroom();
    let query = ContentQuery::new(&store);
    let all = query.list_all().unwrap();

    for tag in ["politics", "economy", "sport", "weather"] {
        let tagged = query.by_tag(tag).unwrap();
        assert!(tagged.iter().all(|a| a.tags.iter().any(|t| t == tag)));

        let expected: Vec<_> = all
            .iter()
            .filter(|a| a.tags.iter().any(|t| t == tag))
            .cloned()
            .collect();
        assert_eq!(tagged, expected);
    }

    let politics: Vec<_> = query
        .by_tag("politics")
        .unwrap()
        .into_iter()
        .map(|a| a.slug)
        .collect();
    assert_eq!(politics, vec!["budget", "summit"]);
}

#[test]
fn untagged_article_matches_no_tag() {
    let (_dir, store) = newsroom();
    let query = ContentQuery::new(&store);

    let weather = query.get_by_slug("weather").unwrap();
    assert!(weather.tags.is_empty());

    for tag in query.all_tags().unwrap() {
        assert!(query
            .by_tag(&tag)
            .unwrap()
            .iter()
            .all(|a| a.slug != "weather"));
    }
}

#[test]
fn all_tags_collapses_duplicates() {
    let (_dir, store) = newsroom();
    let tags: Vec<_> = ContentQuery::new(&store)
        .all_tags()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(tags, vec!["sport", "economy", "politics"]);
}

#[test]
fn get_by_slug_round_trips_front_matter() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "a.mdx",
        "---\ntitle: \"A\"\ndate: \"2024-01-01\"\ntags: [\"x\", \"y\"]\n---\nHello\n",
    );
    let store = ContentStore::new(StoreConfig::new(dir.path()));

    let article = store.get_by_slug("a").unwrap();
    assert_eq!(article.slug, "a");
    assert_eq!(article.title, "A");
    assert_eq!(article.date, "2024-01-01");
    assert_eq!(article.tags, vec!["x", "y"]);
    assert_eq!(article.body.trim(), "Hello");
}

#[test]
fn get_by_slug_missing_is_none() {
    let (_dir, store) = newsroom();
    let query = ContentQuery::new(&store);

    assert!(query.get_by_slug("does-not-exist").is_none());
    assert!(query.get_by_slug("../derby").is_none());
    assert!(query.get_by_slug("").is_none());
}

#[test]
fn missing_directory_fails_listing_only() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContentStore::new(StoreConfig::new(dir.path().join("absent")));
    let query = ContentQuery::new(&store);

    assert!(query.list_all().is_err());
    assert!(query.by_tag("politics").is_err());
    assert!(query.all_tags().is_err());
    assert!(query.get_by_slug("derby").is_none());
}
