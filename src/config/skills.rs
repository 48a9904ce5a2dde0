//! Core skill listings
//!
//! Single source of truth for the technology names shown on the homepage
//! terminal and the about-page badges, and used by `check` to flag unknown
//! tags.

/// Core skills and technologies, ordered by display priority
pub const SKILLS: &[&str] = &[
    "TypeScript",
    "Next.js",
    "Playwright",
    "Python",
    "C#",
    "Docker",
    "AWS",
    "Terraform",
    "CloudFormation",
    "Git",
    "Rust",
    "CI/CD",
];

/// Format the skills list as column-aligned rows for terminal display
///
/// Columns are padded to the widest entry in that column:
///
/// ```text
/// TypeScript | Next.js   | Playwright
/// Python     | C#        | Docker
/// ...
/// ```
pub fn format_skills_grid(columns: usize) -> Vec<String> {
    if columns == 0 {
        return Vec::new();
    }

    let mut widths = vec![0usize; columns];
    for (i, skill) in SKILLS.iter().enumerate() {
        let col = i % columns;
        widths[col] = widths[col].max(skill.chars().count());
    }

    SKILLS
        .chunks(columns)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, skill)| format!("{:<width$}", skill, width = widths[col]))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for skill in SKILLS {
            assert!(seen.insert(skill), "duplicate skill {}", skill);
        }
    }

    #[test]
    fn test_grid_row_count() {
        let rows = format_skills_grid(3);
        assert_eq!(rows.len(), SKILLS.len().div_ceil(3));
    }

    #[test]
    fn test_grid_columns_are_aligned() {
        let rows = format_skills_grid(3);
        // Full rows share the position of their separators
        let positions: Vec<Vec<usize>> = rows
            .iter()
            .filter(|r| r.matches(" | ").count() == 2)
            .map(|r| r.match_indices(" | ").map(|(i, _)| i).collect())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_zero_columns_yields_nothing() {
        assert!(format_skills_grid(0).is_empty());
    }
}
