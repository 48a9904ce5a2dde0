//! Create a new content file

use anyhow::Result;
use std::fs;

use crate::content::lister::CONTENT_EXT;
use crate::Site;

/// Scaffold a locale-tagged content file with a frontmatter template
pub fn run(site: &Site, title: &str, kind: &str, locale: Option<&str>) -> Result<()> {
    let target_dir = match kind {
        "post" | "posts" => &site.posts_dir,
        "project" | "projects" => &site.projects_dir,
        _ => anyhow::bail!("Unknown kind: {}. Available: post, project", kind),
    };

    fs::create_dir_all(target_dir)?;

    let locale = locale.unwrap_or(&site.config.default_locale);
    if !site.config.locales.iter().any(|l| l == locale) {
        anyhow::bail!(
            "Unknown locale: {}. Configured: {}",
            locale,
            site.config.locales.join(", ")
        );
    }

    let slug = slug::slugify(title);
    let file_path = target_dir.join(format!("{}.{}.{}", slug, locale, CONTENT_EXT));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let today = chrono::Local::now().format("%Y-%m-%d");
    let content = format!(
        "---\ntitle: {}\npublishedAt: {}\nsummary: \"\"\ntags: []\n---\n\n",
        title, today
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
