//! Content entry model

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;

use super::markdown::plain_text;
use super::FrontMatter;

/// Title used when a document has neither a heading nor a front-matter title
pub const UNTITLED: &str = "Untitled";

lazy_static! {
    static ref DATE_PREFIX: Regex = Regex::new(r"^(\d{4}-\d{2}-\d{2})").unwrap();
}

/// One parsed Markdown document (an article or a paper)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentEntry {
    /// File stem, unique within its collection
    pub identifier: String,

    /// Title taken from the first `# ` heading line
    pub title: String,

    /// Full document text, front-matter included
    pub raw_body: String,

    /// Source file path
    pub source: PathBuf,

    /// Optional front-matter metadata
    #[serde(skip)]
    pub front_matter: FrontMatter,
}

impl ContentEntry {
    /// Build an entry from a file stem and the document text
    pub fn parse(identifier: impl Into<String>, raw_body: String, source: PathBuf) -> Self {
        let (front_matter, body) = FrontMatter::parse(&raw_body);
        let title = extract_title(body)
            .or_else(|| front_matter.title.clone())
            .unwrap_or_else(|| UNTITLED.to_string());

        Self {
            identifier: identifier.into(),
            title,
            front_matter,
            raw_body,
            source,
        }
    }

    /// Markdown to render in the detail view (front-matter removed)
    pub fn body(&self) -> &str {
        FrontMatter::parse(&self.raw_body).1
    }

    /// Publication date from front-matter, else from a `YYYY-MM-DD` filename prefix
    pub fn date(&self) -> Option<NaiveDate> {
        self.front_matter.parse_date().or_else(|| {
            DATE_PREFIX
                .captures(&self.identifier)
                .and_then(|c| NaiveDate::parse_from_str(&c[1], "%Y-%m-%d").ok())
        })
    }

    /// Front-matter tags
    pub fn tags(&self) -> &[String] {
        &self.front_matter.tags
    }

    /// Plain-text teaser: front-matter summary, else the first prose paragraph
    /// with its markup removed
    pub fn summary(&self) -> Option<String> {
        if let Some(summary) = &self.front_matter.summary {
            return Some(summary.trim().to_string());
        }

        self.body()
            .split("\n\n")
            .map(str::trim)
            .find(|block| {
                !block.is_empty()
                    && !block.starts_with('#')
                    && !block.starts_with("```")
                    && !block.starts_with('|')
                    && !block.starts_with('<')
                    && !block.starts_with("---")
            })
            .map(plain_text)
            .filter(|text| !text.is_empty())
    }
}

/// Text after the first line that starts with a single `# ` marker, trimmed
pub fn extract_title(body: &str) -> Option<String> {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, text: &str) -> ContentEntry {
        ContentEntry::parse(id, text.to_string(), PathBuf::from(format!("{id}.md")))
    }

    #[test]
    fn test_title_from_first_heading() {
        let e = entry("a", "intro line\n#   Foo Bar  \n\n# Second\n");
        assert_eq!(e.title, "Foo Bar");
    }

    #[test]
    fn test_title_exact() {
        assert_eq!(entry("a", "# Foo Bar").title, "Foo Bar");
    }

    #[test]
    fn test_subheadings_are_not_titles() {
        let e = entry("a", "## Section\n### Deeper\n#hashtag\ntext");
        assert_eq!(e.title, UNTITLED);
    }

    #[test]
    fn test_marker_inside_title_is_kept() {
        assert_eq!(entry("a", "# Tips for C# users").title, "Tips for C# users");
    }

    #[test]
    fn test_untitled_without_heading() {
        assert_eq!(entry("a", "just prose\nmore prose").title, UNTITLED);
        assert_eq!(entry("a", "").title, UNTITLED);
    }

    #[test]
    fn test_front_matter_title_is_fallback() {
        let e = entry("a", "---\ntitle: From Meta\n---\nno heading here");
        assert_eq!(e.title, "From Meta");

        let e = entry("a", "---\ntitle: From Meta\n---\n# From Heading\n");
        assert_eq!(e.title, "From Heading");
    }

    #[test]
    fn test_raw_body_is_full_text() {
        let text = "---\ntitle: T\n---\n# Heading\nbody";
        let e = entry("a", text);
        assert_eq!(e.raw_body, text);
        assert_eq!(e.body(), "# Heading\nbody");
    }

    #[test]
    fn test_date_from_filename_prefix() {
        let e = entry("2024-06-01-ai-first", "# AI First");
        assert_eq!(e.date(), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(entry("notes", "# Notes").date(), None);
    }

    #[test]
    fn test_summary_skips_headings() {
        let e = entry("a", "# Title\n\nFirst paragraph\ncontinues here.\n\nSecond.");
        assert_eq!(
            e.summary().as_deref(),
            Some("First paragraph continues here.")
        );
        assert_eq!(entry("a", "# Only a title").summary(), None);
    }
}
