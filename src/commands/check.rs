//! Validate content files before a build

use anyhow::Result;
use std::path::Path;

use crate::config::SKILLS;
use crate::content::{loader, parse_published_at, parse_string_list, ContentEntry, REQUIRED_KEYS};
use crate::Site;

/// Lint every collection: frontmatter must parse, the conventional keys
/// must be present, dates and tag lists must be well-formed
///
/// Unknown tags only warn; anything else counts as an error and fails the
/// command, matching the pipeline's build-time fail-fast policy.
pub fn run(site: &Site) -> Result<()> {
    let mut errors = 0usize;
    let mut warnings = 0usize;

    for (label, dir) in [
        ("posts", site.posts_dir.as_path()),
        ("projects", site.projects_dir.as_path()),
    ] {
        match check_collection(label, dir) {
            Ok((e, w)) => {
                errors += e;
                warnings += w;
            }
            Err(e) => {
                println!("error: {}: {:#}", label, e);
                errors += 1;
            }
        }
    }

    println!();
    if errors > 0 {
        anyhow::bail!("check failed: {} error(s), {} warning(s)", errors, warnings);
    }
    println!("check passed ({} warning(s))", warnings);
    Ok(())
}

fn check_collection(label: &str, dir: &Path) -> Result<(usize, usize)> {
    // No locale filter: every file is visited exactly once, tagged or not
    let entries = loader::load_entries(dir, None)?;
    tracing::info!("Checking {} {} entries", entries.len(), label);

    let mut errors = 0;
    let mut warnings = 0;
    for entry in &entries {
        let (e, w) = check_entry(label, entry);
        errors += e;
        warnings += w;
    }

    Ok((errors, warnings))
}

fn check_entry(label: &str, entry: &ContentEntry) -> (usize, usize) {
    let mut errors = 0;
    let mut warnings = 0;

    for key in REQUIRED_KEYS {
        match entry.metadata.get(*key) {
            Some(value) if !value.trim().is_empty() => {}
            _ => {
                println!("error: {}/{}: missing required field `{}`", label, entry.slug, key);
                errors += 1;
            }
        }
    }

    if let Some(raw) = entry.metadata.get("publishedAt") {
        if parse_published_at(raw).is_none() {
            println!(
                "error: {}/{}: unparseable publishedAt `{}`",
                label, entry.slug, raw
            );
            errors += 1;
        }
    }

    if let Some(raw) = entry.metadata.get("tags") {
        match parse_string_list(raw) {
            None => {
                println!("error: {}/{}: malformed tags list `{}`", label, entry.slug, raw);
                errors += 1;
            }
            Some(tags) => {
                for tag in tags {
                    if !SKILLS.contains(&tag.as_str()) {
                        println!(
                            "warning: {}/{}: tag `{}` is not a known skill",
                            label, entry.slug, tag
                        );
                        warnings += 1;
                    }
                }
            }
        }
    }

    (errors, warnings)
}
