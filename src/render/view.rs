//! List/detail view resolution

use crate::content::{ContentEntry, ProjectRecord};
use crate::session::ViewMode;

/// Anything that can be looked up by identifier
pub trait Identified {
    fn identifier(&self) -> &str;
}

impl Identified for ContentEntry {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Identified for ProjectRecord {
    fn identifier(&self) -> &str {
        self.id
    }
}

/// What a category page shows
#[derive(Debug, PartialEq)]
pub enum CategoryView<'a, T> {
    /// Nothing to list
    Empty,
    List(&'a [T]),
    Detail(&'a T),
    /// The selection matches no item; the list is shown instead
    Missing { id: &'a str, items: &'a [T] },
}

impl<T> CategoryView<'_, T> {
    /// Template discriminator
    pub fn kind(&self) -> &'static str {
        match self {
            CategoryView::Empty => "empty",
            CategoryView::List(_) => "list",
            CategoryView::Detail(_) => "detail",
            CategoryView::Missing { .. } => "missing",
        }
    }

    /// Whether the session's selection is stale and should be cleared
    pub fn is_stale(&self) -> bool {
        matches!(self, CategoryView::Missing { .. })
    }
}

/// Decide the view from the category's state and the freshly loaded items
pub fn resolve<'a, T: Identified>(mode: ViewMode<'a>, items: &'a [T]) -> CategoryView<'a, T> {
    if items.is_empty() {
        return CategoryView::Empty;
    }

    match mode {
        ViewMode::List => CategoryView::List(items),
        ViewMode::Detail(id) => match items.iter().find(|item| item.identifier() == id) {
            Some(item) => CategoryView::Detail(item),
            None => CategoryView::Missing { id, items },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(ids: &[&str]) -> Vec<ContentEntry> {
        ids.iter()
            .map(|id| ContentEntry::parse(*id, format!("# {id}"), PathBuf::from(id)))
            .collect()
    }

    #[test]
    fn test_list_when_nothing_selected() {
        let items = entries(&["b", "a"]);
        assert_eq!(resolve(ViewMode::List, &items), CategoryView::List(&items[..]));
    }

    #[test]
    fn test_detail_for_selected_id() {
        let items = entries(&["b", "a"]);
        match resolve(ViewMode::Detail("a"), &items) {
            CategoryView::Detail(entry) => assert_eq!(entry.title, "a"),
            other => panic!("expected detail, got {}", other.kind()),
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_list() {
        let items = entries(&["b", "a"]);
        let view = resolve(ViewMode::Detail("deleted"), &items);
        assert!(view.is_stale());
        assert_eq!(
            view,
            CategoryView::Missing {
                id: "deleted",
                items: &items[..]
            }
        );
    }

    #[test]
    fn test_empty_collection_ignores_selection() {
        let items: Vec<ContentEntry> = Vec::new();
        assert_eq!(resolve(ViewMode::Detail("x"), &items).kind(), "empty");
        assert_eq!(resolve(ViewMode::List, &items).kind(), "empty");
    }

    #[test]
    fn test_projects_resolve_by_id() {
        let view = resolve(ViewMode::Detail("example-project"), crate::content::profile::PROJECTS);
        assert_eq!(view.kind(), "detail");
    }
}
