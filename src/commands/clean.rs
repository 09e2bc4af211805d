//! Clean the export directory

use anyhow::Result;
use std::fs;

use crate::RapidNews;

/// Remove the static export directory
pub fn run(app: &RapidNews) -> Result<()> {
    if app.output_dir.exists() {
        fs::remove_dir_all(&app.output_dir)?;
        tracing::info!("Deleted: {:?}", app.output_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_output_only() {
        let dir = tempfile::tempdir().unwrap();
        let app = RapidNews::new(dir.path()).unwrap();
        fs::create_dir_all(app.output_dir.join("news/a")).unwrap();
        fs::create_dir_all(&app.content_dir).unwrap();

        run(&app).unwrap();
        assert!(!app.output_dir.exists());
        assert!(app.content_dir.exists());

        // nothing to remove is fine
        run(&app).unwrap();
    }
}
