//! Content module - discovery, front-matter parsing, and entry assembly

mod entry;
mod error;
mod frontmatter;
pub mod lister;
pub mod loader;

pub use entry::{parse_published_at, sort_newest_first, ContentEntry, REQUIRED_KEYS};
pub use error::ContentError;
pub use frontmatter::{parse_string_list, Frontmatter, MissingFrontmatter};
