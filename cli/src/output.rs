//! Text and JSON rendering of command results.

use std::fmt::Write as _;

use portfolio_core::catalog::format_tags;
use portfolio_core::{HttpValidationError, Project};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn render_project(project: &Project) -> String {
    let mut out = format!("#{} {} [{}]\n", project.id, project.title, project.category);
    if !project.description.is_empty() {
        let _ = writeln!(out, "    {}", project.description);
    }
    if !project.image_url.is_empty() {
        let _ = writeln!(out, "    image: {}", project.image_url);
    }
    if !project.tags.is_empty() {
        let _ = writeln!(out, "    tags: {}", format_tags(&project.tags));
    }
    out
}

pub fn render_projects<'a>(projects: impl IntoIterator<Item = &'a Project>) -> String {
    let rendered: Vec<String> = projects.into_iter().map(render_project).collect();
    if rendered.is_empty() {
        "no projects yet; run `portfolio init` to add the sample set\n".to_string()
    } else {
        rendered.join("\n")
    }
}

pub fn render_validation(err: &HttpValidationError) -> String {
    let mut out = String::from("the server rejected the request:\n");
    for item in &err.detail {
        let _ = writeln!(out, "  {}: {} ({})", item.location(), item.msg, item.kind);
    }
    out
}
