//! Site configuration (_config.yml)

use anyhow::Result;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub role: String,
    pub tagline: String,
    pub bio: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub papers_dir: String,
    pub assets_dir: String,
    pub public_dir: String,

    // Writing
    pub new_post_name: String,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Navigation
    /// Menu label of the articles page ("Blog" or "Insights")
    pub blog_label: String,

    // Footer
    pub copyright_year: Option<i32>,
    #[serde(default)]
    pub social: Vec<SocialLink>,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Jakob Figur | Technical Consultant & AI Engineer & Researcher".to_string(),
            author: "Jakob Figur".to_string(),
            role: "Technical Consultant @ Digistore24 · AI Engineer & Researcher".to_string(),
            tagline: "Synthesizing High-Scale Business Logic with Agentic Intelligence."
                .to_string(),
            bio: "Architecting the bridge between business complexity and AI-driven efficiency. \
                  From Fullstack Development to Strategic AI Consulting."
                .to_string(),
            language: "en".to_string(),

            url: "https://jakob-figur.io".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            papers_dir: "papers".to_string(),
            assets_dir: "assets".to_string(),
            public_dir: "public".to_string(),

            new_post_name: ":year-:month-:day-:title.md".to_string(),
            highlight: HighlightConfig::default(),

            blog_label: "Blog".to_string(),

            copyright_year: None,
            social: SocialLink::defaults(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Year printed in the footer
    pub fn copyright_year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// A link shown in the sidebar and footer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl SocialLink {
    fn defaults() -> Vec<Self> {
        [
            (
                "LinkedIn",
                "https://www.linkedin.com/in/jakob-figur-2b9501367/",
            ),
            ("GitHub", "https://github.com/jakobfigur"),
            ("X", "https://x.com/JakobFigur"),
        ]
        .into_iter()
        .map(|(name, url)| Self {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect()
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Development server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Idle time after which a visitor's session is forgotten
    pub session_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8501,
            session_ttl_secs: 3600,
        }
    }
}
