//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::helpers::expand_post_name;

const CONFIG_HEADER: &str = "# Portfolio configuration
# Directories are relative to this file. Restart the server after editing.

";

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();

    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join(&config.content_dir))?;
    fs::create_dir_all(target_dir.join(&config.papers_dir))?;
    fs::create_dir_all(target_dir.join(&config.assets_dir).join("images"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        let yaml = serde_yaml::to_string(&config)?;
        fs::write(&config_path, format!("{}{}", CONFIG_HEADER, yaml))?;
    }

    let today = chrono::Local::now().date_naive();
    let sample_path = target_dir
        .join(&config.content_dir)
        .join(expand_post_name(&config.new_post_name, &today, "hello-world"));

    if !sample_path.exists() {
        let sample = format!(
            r#"---
date: {}
tags: [welcome]
summary: A first article to show how Markdown files become pages.
---

# Hello World

Every Markdown file in this folder is an article. The first line starting
with `# ` is its title, and files are listed newest first by file name.

## Writing

```bash
$ folio-rs new "My New Article"
$ folio-rs new --kind paper "A Research Paper"
```

## Serving

```bash
$ folio-rs serve --watch
```
"#,
            today.format("%Y-%m-%d")
        );
        fs::write(&sample_path, sample)?;
    }

    Ok(())
}
