//! Errors raised by the content pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Content pipeline errors
///
/// There is no recovery path anywhere in the pipeline: an error at any stage
/// aborts the whole collection retrieval. The pipeline runs at build time,
/// where a failing file is fixed by hand.
#[derive(Error, Debug)]
pub enum ContentError {
    /// A content directory or file is missing
    #[error("content path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file has no frontmatter block delimited by `---` lines
    #[error("malformed content in {}: {reason}", path.display())]
    MalformedContent { path: PathBuf, reason: String },

    /// Any other filesystem failure
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Map an I/O error to `NotFound` or `Io` depending on its kind
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ContentError::NotFound(path)
        } else {
            ContentError::Io { path, source }
        }
    }
}
