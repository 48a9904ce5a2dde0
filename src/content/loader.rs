//! Content loader - reads and assembles entries from a content directory

use std::fs;
use std::path::Path;

use super::entry::ContentEntry;
use super::error::ContentError;
use super::frontmatter::Frontmatter;
use super::lister::{list_content_files, CONTENT_EXT};

/// Read one content file and parse its front-matter
///
/// Parser errors propagate unchanged in kind; only the offending path is
/// attached for the build log.
pub fn read_content_file(path: &Path) -> Result<Frontmatter, ContentError> {
    let raw = fs::read_to_string(path).map_err(|e| ContentError::from_io(path.to_path_buf(), e))?;
    Frontmatter::parse(&raw).map_err(|e| ContentError::MalformedContent {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load every content entry in a directory, optionally filtered by locale
///
/// Output order mirrors the directory listing. Fails fast: the first file
/// that cannot be read or parsed aborts the whole aggregation with no
/// partial result, which is the right trade-off for build-time content.
pub fn load_entries(dir: &Path, locale: Option<&str>) -> Result<Vec<ContentEntry>, ContentError> {
    let files = list_content_files(dir, locale)?;
    tracing::debug!("Loading {} content files from {:?}", files.len(), dir);

    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let fm = read_content_file(&dir.join(&file))?;
        entries.push(ContentEntry {
            metadata: fm.metadata,
            slug: derive_slug(&file, locale),
            content: fm.body,
        });
    }

    Ok(entries)
}

/// Derive the slug from a file name
///
/// The extension is always stripped; when a locale was used to filter, the
/// trailing `.<locale>` segment goes too. The strip is anchored to the end
/// of the name, so a base name that merely contains the locale code
/// elsewhere keeps it.
fn derive_slug(file_name: &str, locale: Option<&str>) -> String {
    let stem = file_name
        .strip_suffix(&format!(".{}", CONTENT_EXT))
        .unwrap_or(file_name);
    if let Some(locale) = locale {
        if let Some(base) = stem.strip_suffix(&format!(".{}", locale)) {
            return base.to_string();
        }
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        let mut f = File::create(dir.path().join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    fn post(title: &str, date: &str, summary: &str, body: &str) -> String {
        format!(
            "---\ntitle: {}\npublishedAt: {}\nsummary: {}\n---\n\n{}\n",
            title, date, summary, body
        )
    }

    #[test]
    fn test_derive_slug() {
        assert_eq!(derive_slug("post.mdx", None), "post");
        assert_eq!(derive_slug("post.ja.mdx", Some("ja")), "post");
        assert_eq!(derive_slug("post.ja.mdx", None), "post.ja");
        // Locale code inside the base name survives an anchored strip
        assert_eq!(derive_slug("jargon.ja.mdx", Some("ja")), "jargon");
    }

    #[test]
    fn test_load_entries_per_locale() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.ja.mdx", &post("A", "2025-01-01", "S1", "Hello"));
        write_file(&dir, "a.en.mdx", &post("A (en)", "2025-01-01", "S1", "Hello en"));

        let ja = load_entries(dir.path(), Some("ja")).unwrap();
        assert_eq!(ja.len(), 1);
        assert_eq!(ja[0].slug, "a");
        assert_eq!(ja[0].metadata.get("title").unwrap(), "A");
        assert_eq!(ja[0].metadata.get("publishedAt").unwrap(), "2025-01-01");
        assert_eq!(ja[0].metadata.get("summary").unwrap(), "S1");
        assert_eq!(ja[0].content, "Hello");

        let en = load_entries(dir.path(), Some("en")).unwrap();
        assert_eq!(en.len(), 1);
        assert_eq!(en[0].slug, "a");
        assert_eq!(en[0].content, "Hello en");
    }

    #[test]
    fn test_load_entries_without_locale_keeps_tags_in_slug() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.ja.mdx", &post("A", "2025-01-01", "S", "ja body"));
        write_file(&dir, "a.en.mdx", &post("A", "2025-01-01", "S", "en body"));

        let mut slugs: Vec<_> = load_entries(dir.path(), None)
            .unwrap()
            .into_iter()
            .map(|e| e.slug)
            .collect();
        slugs.sort();
        assert_eq!(slugs, vec!["a.en", "a.ja"]);
    }

    #[test]
    fn test_empty_body_yields_empty_content() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "stub.mdx", "---\ntitle: Stub\n---");

        let entries = load_entries(dir.path(), None).unwrap();
        assert_eq!(entries[0].content, "");
    }

    #[test]
    fn test_malformed_file_fails_whole_aggregation() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "good.mdx", &post("Good", "2025-01-01", "S", "ok"));
        write_file(&dir, "bad.mdx", "no frontmatter here");

        let err = load_entries(dir.path(), None).unwrap_err();
        assert!(matches!(err, ContentError::MalformedContent { .. }));
    }

    #[test]
    fn test_repeated_loads_are_structurally_equal() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.mdx", &post("A", "2025-01-01", "S", "Body"));
        write_file(&dir, "b.mdx", &post("B", "2025-02-01", "S", "Body"));

        let first = load_entries(dir.path(), None).unwrap();
        let second = load_entries(dir.path(), None).unwrap();
        assert_eq!(first, second);
    }
}
