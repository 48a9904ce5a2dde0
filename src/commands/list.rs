//! List site content

use anyhow::Result;

use crate::config::format_skills_grid;
use crate::content::{sort_newest_first, ContentEntry};
use crate::helpers::format_published;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str, locale: Option<&str>, json: bool) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let mut posts = site.blog_posts(locale)?;
            sort_newest_first(&mut posts);
            print_entries("Posts", &posts, json)?;
        }
        "project" | "projects" => {
            let mut projects = site.projects(locale)?;
            sort_newest_first(&mut projects);
            print_entries("Projects", &projects, json)?;
        }
        "tag" | "tags" => {
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for entry in site
                .blog_posts(locale)?
                .iter()
                .chain(site.projects(locale)?.iter())
            {
                for tag in entry.tags() {
                    *tags.entry(tag).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "skill" | "skills" => {
            for row in format_skills_grid(3) {
                println!("{}", row);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, projects, tags, skills",
                content_type
            );
        }
    }

    Ok(())
}

fn print_entries(label: &str, entries: &[ContentEntry], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    println!("{} ({}):", label, entries.len());
    for entry in entries {
        let date = entry
            .metadata
            .get("publishedAt")
            .map(|d| format_published(d, false))
            .unwrap_or_else(|| "undated".to_string());
        println!("  {} - {} [{}]", date, entry.title(), entry.slug);
    }

    Ok(())
}
