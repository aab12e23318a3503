//! Read-time views over a list of projects: categories, filtering and tags.

use crate::types::Project;

/// Category selection for a gallery view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    /// `"All"` (any case) or an empty string selects everything.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(category) => project.category == *category,
        }
    }
}

/// Distinct categories across `projects`, in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for project in projects {
        if !seen.iter().any(|c| *c == project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}

pub fn filter_by_category<'a>(projects: &'a [Project], filter: &CategoryFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Split a comma-separated tag list, trimming whitespace and dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn format_tags(tags: &[String]) -> String {
    tags.join(", ")
}
