//! mdxsite-rs: content pipeline for a bilingual MDX portfolio and blog site
//!
//! This crate discovers `.mdx` content files, filters them by locale suffix,
//! parses their front-matter into flat string metadata, and assembles
//! `{metadata, slug, content}` entries for the page-rendering layer to
//! consume.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

use content::{loader, ContentEntry, ContentError};

/// The main site handle: configuration plus resolved content roots
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Blog posts directory
    pub posts_dir: std::path::PathBuf,
    /// Project write-ups directory
    pub projects_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site instance from a base directory
    ///
    /// Reads `site.yml` when present, otherwise falls back to defaults.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let projects_dir = base_dir.join(&config.projects_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            projects_dir,
        })
    }

    /// Retrieve all blog posts, optionally filtered by locale
    ///
    /// Every call is a cold read-through: the directory is re-listed and
    /// every file re-parsed, so an unchanged filesystem yields structurally
    /// equal results.
    pub fn blog_posts(&self, locale: Option<&str>) -> Result<Vec<ContentEntry>, ContentError> {
        loader::load_entries(&self.posts_dir, locale)
    }

    /// Retrieve all project write-ups, optionally filtered by locale
    pub fn projects(&self, locale: Option<&str>) -> Result<Vec<ContentEntry>, ContentError> {
        loader::load_entries(&self.projects_dir, locale)
    }
}
