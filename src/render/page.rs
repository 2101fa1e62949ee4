//! Navigation entries

use std::str::FromStr;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::Collection;
use crate::session::Category;

/// Every page of the site. Each maps to exactly one render function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Identity,
    Experience,
    Projects,
    Blog,
    Papers,
}

/// A path segment that names no page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl Page {
    /// Menu order
    pub const ALL: [Page; 5] = [
        Page::Identity,
        Page::Experience,
        Page::Projects,
        Page::Blog,
        Page::Papers,
    ];

    /// URL path segment
    pub fn slug(self) -> &'static str {
        match self {
            Page::Identity => "identity",
            Page::Experience => "experience",
            Page::Projects => "projects",
            Page::Blog => "blog",
            Page::Papers => "papers",
        }
    }

    /// Menu label
    pub fn label(self, config: &SiteConfig) -> &str {
        match self {
            Page::Identity => "Identity",
            Page::Experience => "Experience",
            Page::Projects => "Projects",
            Page::Blog => &config.blog_label,
            Page::Papers => "Papers",
        }
    }

    /// Category whose selection this page displays
    pub fn category(self) -> Option<Category> {
        match self {
            Page::Projects => Some(Category::Project),
            Page::Blog => Some(Category::Post),
            Page::Papers => Some(Category::Paper),
            Page::Identity | Page::Experience => None,
        }
    }

    /// Page that lists a category
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Post => Page::Blog,
            Category::Paper => Page::Papers,
            Category::Project => Page::Projects,
        }
    }

    /// Directory-backed collection shown on this page
    pub fn collection(self) -> Option<Collection> {
        self.category().and_then(Category::collection)
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_matches('/') {
            "" | "identity" => Ok(Page::Identity),
            "experience" => Ok(Page::Experience),
            "projects" => Ok(Page::Projects),
            "blog" | "insights" => Ok(Page::Blog),
            "papers" => Ok(Page::Papers),
            other => Err(UnknownPage(other.to_string())),
        }
    }
}
