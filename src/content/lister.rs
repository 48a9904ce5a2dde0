//! Content file discovery
//!
//! Content directories are flat: one `.mdx` file per post or project, with
//! locale-tagged variants named `<slug>.<locale>.mdx` (e.g.
//! `static-typing.ja.mdx`) next to untagged ones.

use std::fs;
use std::path::Path;

use super::error::ContentError;

/// Extension content files must carry, matched case-sensitively
pub const CONTENT_EXT: &str = "mdx";

/// List content file names in a directory, optionally filtered by locale
///
/// Only the immediate entries of `dir` are considered. With a locale, a
/// name must end with the exact dot-delimited suffix `.<locale>.mdx`, so
/// `japanese.mdx` never matches locale `ja`. Without one, tagged and
/// untagged files are returned together. Order is whatever the directory
/// listing yields; callers that need a stable order sort themselves.
///
/// A missing directory is an error, not an empty listing.
pub fn list_content_files(dir: &Path, locale: Option<&str>) -> Result<Vec<String>, ContentError> {
    let entries =
        fs::read_dir(dir).map_err(|e| ContentError::from_io(dir.to_path_buf(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ContentError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::warn!("Skipping non-UTF-8 file name in {:?}", dir);
            continue;
        };
        if !has_content_ext(name) {
            continue;
        }
        if let Some(locale) = locale {
            if !name.ends_with(&format!(".{}.{}", locale, CONTENT_EXT)) {
                continue;
            }
        }
        files.push(name.to_string());
    }

    Ok(files)
}

/// Case-sensitive extension check (`.MDX` is rejected)
fn has_content_ext(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == CONTENT_EXT)
}
