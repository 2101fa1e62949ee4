//! Per-visitor navigation state
//!
//! Each category (post, paper, project) is a two-state machine: LIST when
//! nothing is selected, DETAIL when an identifier is selected. `open` moves
//! to DETAIL (replacing any earlier selection), `back` returns to LIST.

mod store;

pub use store::{Session, SessionStore};

use serde::Serialize;

use crate::content::Collection;

/// A selectable content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Post,
    Paper,
    Project,
}

impl Category {
    /// Directory-backed collection, if the category is loaded from files
    pub fn collection(self) -> Option<Collection> {
        match self {
            Category::Post => Some(Collection::Articles),
            Category::Paper => Some(Collection::Papers),
            Category::Project => None,
        }
    }
}

impl From<Collection> for Category {
    fn from(collection: Collection) -> Self {
        match collection {
            Collection::Articles => Category::Post,
            Collection::Papers => Category::Paper,
        }
    }
}

/// Presentation state of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode<'a> {
    List,
    Detail(&'a str),
}

/// The identifiers currently open, at most one per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    selected_post: Option<String>,
    selected_paper: Option<String>,
    selected_project: Option<String>,
}

impl SelectionState {
    /// Fresh state: every category in list view
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, category: Category) -> &Option<String> {
        match category {
            Category::Post => &self.selected_post,
            Category::Paper => &self.selected_paper,
            Category::Project => &self.selected_project,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<String> {
        match category {
            Category::Post => &mut self.selected_post,
            Category::Paper => &mut self.selected_paper,
            Category::Project => &mut self.selected_project,
        }
    }

    /// Currently selected identifier of a category
    pub fn get(&self, category: Category) -> Option<&str> {
        self.slot(category).as_deref()
    }

    /// Select an identifier. Existence is not checked here; a stale or
    /// unknown identifier is resolved when the page is rendered.
    pub fn set(&mut self, category: Category, id: impl Into<String>) {
        *self.slot_mut(category) = Some(id.into());
    }

    /// Deselect, returning to the list view
    pub fn clear(&mut self, category: Category) {
        *self.slot_mut(category) = None;
    }

    /// LIST → DETAIL
    pub fn open(&mut self, category: Category, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!("Open {:?} {:?}", category, id);
        self.set(category, id);
    }

    /// DETAIL → LIST; a no-op in LIST
    pub fn back(&mut self, category: Category) {
        self.clear(category);
    }

    /// Current state of a category's machine
    pub fn mode(&self, category: Category) -> ViewMode<'_> {
        match self.get(category) {
            Some(id) => ViewMode::Detail(id),
            None => ViewMode::List,
        }
    }
}
