//! Configuration module

mod site;
mod skills;

pub use site::AuthorConfig;
pub use site::SiteConfig;
pub use skills::{format_skills_grid, SKILLS};
