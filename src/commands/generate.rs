//! Export the site as static files
//!
//! Every page is written once in its list view, and once per item in its
//! detail view. Open and back become plain links between those files.

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::profile::PROJECTS;
use crate::content::ContentLoader;
use crate::render::{Output, Page, RenderContext, Renderer};
use crate::session::{Category, SelectionState};
use crate::templates::STYLESHEET;
use crate::Folio;

/// Export the site into the public directory
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();
    let renderer = Renderer::new(folio)?;
    let public_dir = &folio.public_dir;
    let mut written = 0usize;

    fs::create_dir_all(public_dir)?;

    for page in Page::ALL {
        let html = render(&renderer, page, &SelectionState::new())?;
        write_file(&public_dir.join(page.slug()).join("index.html"), &html)?;
        if page == Page::Identity {
            write_file(&public_dir.join("index.html"), &html)?;
        }
        written += 1;

        let Some(category) = page.category() else {
            continue;
        };

        for id in identifiers(folio, category)? {
            if !is_safe_segment(&id) {
                tracing::warn!("Skipping {:?}: not usable as a path segment", id);
                continue;
            }
            let mut selection = SelectionState::new();
            selection.open(category, id.as_str());
            let html = render(&renderer, page, &selection)?;
            write_file(
                &public_dir.join(page.slug()).join(&id).join("index.html"),
                &html,
            )?;
            written += 1;
        }
    }

    let not_found = renderer.render_not_found("/404.html", Output::Static)?;
    write_file(&public_dir.join("404.html"), &not_found)?;
    write_file(&public_dir.join("style.css"), STYLESHEET)?;

    let assets = copy_dir(&folio.assets_dir, &public_dir.join("assets"))?;

    tracing::info!(
        "Generated {} pages and copied {} assets in {:.2}s",
        written,
        assets,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn render(renderer: &Renderer, page: Page, selection: &SelectionState) -> Result<String> {
    let ctx = RenderContext::new(page, selection, Output::Static);
    Ok(renderer.render(&ctx)?.html)
}

/// Identifiers that get a detail page
fn identifiers(folio: &Folio, category: Category) -> Result<Vec<String>> {
    match category.collection() {
        Some(collection) => Ok(ContentLoader::new(folio)
            .load(collection)?
            .into_iter()
            .map(|entry| entry.identifier)
            .collect()),
        None => Ok(PROJECTS.iter().map(|p| p.id.to_string()).collect()),
    }
}

fn is_safe_segment(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

/// Copy a directory tree, returning the number of files copied
fn copy_dir(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    if !source_dir.is_dir() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in WalkDir::new(source_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(source_dir)?;
        let dest = dest_dir.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)?;
        count += 1;
    }

    Ok(count)
}
