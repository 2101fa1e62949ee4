//! List site content

use anyhow::Result;
use serde::Serialize;

use crate::content::profile::PROJECTS;
use crate::content::{Collection, ContentLoader};
use crate::Folio;

/// One listed item
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub date: Option<String>,
    pub source: Option<String>,
}

/// Collect the items of a content type
pub fn collect(folio: &Folio, content_type: &str) -> Result<Vec<Listing>> {
    let collection = match content_type {
        "article" | "articles" | "post" | "posts" => Collection::Articles,
        "paper" | "papers" => Collection::Papers,
        "project" | "projects" => {
            return Ok(PROJECTS
                .iter()
                .map(|p| Listing {
                    id: p.id.to_string(),
                    title: p.title.to_string(),
                    date: None,
                    source: None,
                })
                .collect());
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: articles, papers, projects",
                content_type
            );
        }
    };

    let entries = ContentLoader::new(folio).load(collection)?;
    Ok(entries
        .into_iter()
        .map(|e| Listing {
            date: e.date().map(|d| d.format("%Y-%m-%d").to_string()),
            source: Some(e.source.display().to_string()),
            id: e.identifier,
            title: e.title,
        })
        .collect())
}

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, json: bool) -> Result<()> {
    let items = collect(folio, content_type)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("{} ({}):", content_type, items.len());
    for item in items {
        match item.date {
            Some(date) => println!("  {} - {} [{}]", date, item.title, item.id),
            None => println!("  {} [{}]", item.title, item.id),
        }
    }

    Ok(())
}
