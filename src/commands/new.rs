//! Create a new article or paper

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::Collection;
use crate::helpers::expand_post_name;
use crate::Folio;

/// Create a Markdown file for `title` in the collection's directory
pub fn create_entry(folio: &Folio, title: &str, collection: Collection) -> Result<PathBuf> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Title must not be empty");
    }

    let today = chrono::Local::now().date_naive();
    let slug = slug::slugify(title);
    let filename = expand_post_name(&folio.config.new_post_name, &today, &slug);

    // Collections are read from a single flat folder of `*.md` files
    if filename.contains(['/', '\\']) || !filename.ends_with(".md") {
        anyhow::bail!(
            "new_post_name must expand to a flat .md file name, got {:?}",
            filename
        );
    }

    let target_dir = match collection {
        Collection::Articles => &folio.content_dir,
        Collection::Papers => &folio.papers_dir,
    };
    let file_path = target_dir.join(filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = format!(
        "---\ndate: {}\ntags: []\n---\n\n# {}\n\n",
        today.format("%Y-%m-%d"),
        title
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;
    use tempfile::TempDir;

    #[test]
    fn test_create_article() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        let path = create_entry(&folio, "AI-First Engineering", Collection::Articles).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.ends_with("-ai-first-engineering.md"));
        assert!(path.starts_with(&folio.content_dir));

        let entries = ContentLoader::new(&folio).load(Collection::Articles).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "AI-First Engineering");
        assert!(entries[0].date().is_some());
    }

    #[test]
    fn test_create_paper_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        let path = create_entry(&folio, "Agentic Systems", Collection::Papers).unwrap();
        assert!(path.starts_with(&folio.papers_dir));
        assert!(create_entry(&folio, "Agentic Systems", Collection::Papers).is_err());
    }

    #[test]
    fn test_nested_post_name_rejected() {
        let tmp = TempDir::new().unwrap();
        let mut folio = Folio::new(tmp.path()).unwrap();
        folio.config.new_post_name = ":year/:month/:title.md".to_string();

        assert!(create_entry(&folio, "Deep", Collection::Articles).is_err());
        assert!(!folio.content_dir.exists());

        folio.config.new_post_name = ":title.txt".to_string();
        assert!(create_entry(&folio, "Plain", Collection::Articles).is_err());
    }

    #[test]
    fn test_custom_flat_post_name() {
        let tmp = TempDir::new().unwrap();
        let mut folio = Folio::new(tmp.path()).unwrap();
        folio.config.new_post_name = ":title.md".to_string();

        let path = create_entry(&folio, "Short Name", Collection::Articles).unwrap();
        assert_eq!(path, folio.content_dir.join("short-name.md"));
        assert_eq!(ContentLoader::new(&folio).load(Collection::Articles).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_title_rejected() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert!(create_entry(&folio, "   ", Collection::Articles).is_err());
    }
}
