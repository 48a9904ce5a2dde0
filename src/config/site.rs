//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: AuthorConfig,

    // Locales
    pub default_locale: String,
    pub locales: Vec<String>,

    // Content roots, relative to the base directory
    pub posts_dir: String,
    pub projects_dir: String,

    // Date / Time format
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Author information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub github: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Dev Roar Lab".to_string(),
            description: String::new(),
            url: "https://www.dev-roar-lab.com".to_string(),
            author: AuthorConfig {
                name: "dev-roar-researcher".to_string(),
                github: "https://github.com/dev-roar-researcher".to_string(),
            },
            default_locale: "ja".to_string(),
            locales: vec!["ja".to_string(), "en".to_string()],
            posts_dir: "content/posts".to_string(),
            projects_dir: "content/projects".to_string(),
            date_format: "%B %-d, %Y".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.default_locale, "ja");
        assert_eq!(config.locales, vec!["ja", "en"]);
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.projects_dir, "content/projects");
    }

    #[test]
    fn test_load_partial_yaml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: My Site\ndefault_locale: en").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.default_locale, "en");
        // Untouched fields keep their defaults
        assert_eq!(config.posts_dir, "content/posts");
    }

    #[test]
    fn test_unknown_fields_land_in_extra() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: My Site\nanalytics_id: G-123").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert!(config.extra.contains_key("analytics_id"));
    }
}
