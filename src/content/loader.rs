//! Content loader - reads articles and papers from their directories

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{Collection, ContentEntry};
use crate::Folio;

/// Failure while reading a content directory
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content directory pattern {path:?}: {source}")]
    Pattern {
        path: PathBuf,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to list {path:?}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: glob::GlobError,
    },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads content from the configured directories
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Directory a collection is read from
    pub fn dir(&self, collection: Collection) -> &Path {
        match collection {
            Collection::Articles => &self.folio.content_dir,
            Collection::Papers => &self.folio.papers_dir,
        }
    }

    /// Lazily iterate a collection, newest filename first
    pub fn entries(&self, collection: Collection) -> Result<Entries, ContentError> {
        Entries::scan(self.dir(collection))
    }

    /// Load a whole collection; the first unreadable file fails the load
    pub fn load(&self, collection: Collection) -> Result<Vec<ContentEntry>, ContentError> {
        let entries = self.entries(collection)?.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Loaded {} {}", entries.len(), collection.name());
        Ok(entries)
    }
}

/// Lazy sequence of documents in one directory.
///
/// Listing happens up front; each file is read only when the iterator
/// reaches it. Cloning an unstarted (or partially consumed) sequence gives an
/// independent cursor, so the sequence can be restarted.
#[derive(Debug, Clone, Default)]
pub struct Entries {
    paths: Vec<PathBuf>,
    next: usize,
}

impl Entries {
    /// List `*.md` files in `dir`, sorted by filename descending.
    ///
    /// A directory that does not exist yields an empty sequence.
    pub fn scan(dir: &Path) -> Result<Self, ContentError> {
        if !dir.is_dir() {
            return Ok(Self::default());
        }

        let pattern = format!(
            "{}/*.md",
            glob::Pattern::escape(&dir.to_string_lossy())
        );
        let listing = glob::glob(&pattern).map_err(|source| ContentError::Pattern {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for path in listing {
            let path = path.map_err(|source| ContentError::List {
                path: dir.to_path_buf(),
                source,
            })?;
            if path.is_file() {
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

        Ok(Self { paths, next: 0 })
    }

    /// Number of documents left in the sequence
    pub fn remaining(&self) -> usize {
        self.paths.len() - self.next
    }

    /// Rewind to the newest document
    pub fn restart(&mut self) {
        self.next = 0;
    }
}

impl Iterator for Entries {
    type Item = Result<ContentEntry, ContentError>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.get(self.next)?.clone();
        self.next += 1;
        Some(load_entry(&path))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

/// Read and parse a single document
fn load_entry(path: &Path) -> Result<ContentEntry, ContentError> {
    let text = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let identifier = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ContentEntry::parse(identifier, text, path.to_path_buf()))
}
