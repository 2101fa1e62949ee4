//! Content module - articles, papers, and the static profile records

mod entry;
mod frontmatter;
pub mod loader;
mod markdown;
pub mod profile;

pub use entry::{extract_title, ContentEntry, UNTITLED};
pub use frontmatter::FrontMatter;
pub use loader::{ContentError, ContentLoader, Entries};
pub use markdown::MarkdownRenderer;
pub use profile::ProjectRecord;

use serde::Serialize;

/// A directory-backed collection of Markdown documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Blog articles, read from `content_dir`
    Articles,
    /// Concept papers, read from `papers_dir`
    Papers,
}

impl Collection {
    /// Plural name used in logs and the CLI
    pub fn name(self) -> &'static str {
        match self {
            Collection::Articles => "articles",
            Collection::Papers => "papers",
        }
    }
}
