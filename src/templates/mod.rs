//! Built-in portfolio templates using the Tera template engine
//!
//! All templates are embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::content::ProjectRecord;
use crate::config::SocialLink;

/// Stylesheet served at `/style.css` and written by `generate`
pub const STYLESHEET: &str = include_str!("portfolio/style.css");

/// Template renderer with the embedded portfolio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Values coming from documents are escaped explicitly in the templates;
        // rendered markdown and profile fragments are HTML already
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("portfolio/layout.html")),
            ("identity.html", include_str!("portfolio/identity.html")),
            ("experience.html", include_str!("portfolio/experience.html")),
            ("projects.html", include_str!("portfolio/projects.html")),
            ("collection.html", include_str!("portfolio/collection.html")),
            ("not_found.html", include_str!("portfolio/not_found.html")),
            // Partials
            (
                "partials/sidebar.html",
                include_str!("portfolio/partials/sidebar.html"),
            ),
            (
                "partials/footer.html",
                include_str!("portfolio/partials/footer.html"),
            ),
            (
                "partials/actions.html",
                include_str!("portfolio/partials/actions.html"),
            ),
        ])?;

        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    Ok(tera::Value::String(crate::helpers::strip_html(&s)))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 160,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    Ok(tera::Value::String(crate::helpers::truncate(
        &s,
        length,
        Some(&omission),
    )))
}

// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub author: String,
    pub role: String,
    pub tagline: String,
    pub bio: String,
    pub language: String,
    pub root: String,
    /// Absolute URL of the current page
    pub canonical: String,
    pub stylesheet: String,
    pub profile_image: Option<String>,
    pub social: Vec<SocialLink>,
    pub copyright_year: i32,
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
    pub active: bool,
}

/// How the page is delivered: live server with sessions, or static files
#[derive(Debug, Clone, Serialize)]
pub struct ModeData {
    pub interactive: bool,
    pub live_reload: bool,
    /// Page slug sent back with the contact form
    pub page: String,
    pub contact_action: String,
}

/// Open/back affordance: a form post in interactive mode, a link when static
#[derive(Debug, Clone, Serialize)]
pub struct Action {
    pub url: String,
    pub label: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryCard {
    pub id: String,
    pub title: String,
    pub date_label: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub open: Action,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryDetail {
    pub id: String,
    pub title: String,
    pub content: String,
    pub back: Action,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard<'a> {
    #[serde(flatten)]
    pub record: &'a ProjectRecord,
    pub open: Action,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail<'a> {
    #[serde(flatten)]
    pub record: &'a ProjectRecord,
    pub back: Action,
}

/// Headings and copy of a collection page
#[derive(Debug, Clone, Serialize)]
pub struct CollectionCopy {
    pub heading: String,
    pub intro: &'static str,
    pub empty_notice: &'static str,
    pub missing_notice: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_parse() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_truncate_filter() {
        let mut args = HashMap::new();
        args.insert("length".to_string(), tera::Value::from(8));
        let out = truncate_chars_filter(&tera::Value::from("Hello World"), &args).unwrap();
        assert_eq!(out, tera::Value::from("Hello..."));
    }

    #[test]
    fn test_strip_html_filter() {
        let out =
            strip_html_filter(&tera::Value::from("<b>85%</b> faster"), &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::from("85% faster"));
    }
}
