//! folio-rs: a personal portfolio site served from Markdown folders
//!
//! Articles and papers are read from plain Markdown directories on every
//! render. Pages are produced by Tera templates embedded in the binary,
//! either served live with per-visitor navigation state or exported as
//! static files.

pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod helpers;
pub mod render;
pub mod server;
pub mod session;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Profile picture candidates, relative to the assets directory
const PROFILE_IMAGES: [&str; 3] = [
    "images/profile.jpeg",
    "images/profile.jpg",
    "images/profile.png",
];

/// The main portfolio application
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Article directory
    pub content_dir: PathBuf,
    /// Paper directory
    pub papers_dir: PathBuf,
    /// Static assets (images, downloads)
    pub assets_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let papers_dir = base_dir.join(&config.papers_dir);
        let assets_dir = base_dir.join(&config.assets_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            papers_dir,
            assets_dir,
            public_dir,
        }
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("_config.yml")
    }

    /// URL path of the profile picture, if one exists under the assets directory
    pub fn profile_image(&self) -> Option<String> {
        PROFILE_IMAGES
            .iter()
            .find(|candidate| self.assets_dir.join(candidate).is_file())
            .map(|candidate| format!("assets/{}", candidate))
    }

    /// Export the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
