//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with what a page or entry *is* (its id and title) and shows
//! file paths as secondary context. Each stage has a `format_*` function
//! returning `Vec<String>` for testability and a `print_*` wrapper that
//! writes to stdout (failures go to stderr).
//!
//! ## Check
//!
//! ```text
//! Publications
//! 001 3D Reconstruction with Fast Dipole Sums
//!     Id: dipole-sums
//!     Authors: Hanyu Chen*, Bailey Miller*, and Ioannis Gkioulekas
//!     Project: project/dipole-sums/index.html
//!
//! Teaching
//! 001 Computer Graphics Practicum (1 semester)
//!
//! Music
//!     2 tracks
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 dipole-sums 3D Reconstruction with Fast Dipole Sums → project/dipole-sums/index.html
//!
//! Generated 1 home page, 1 project page at dist
//! ```

use crate::authors::resolve_authors;
use crate::generate::{GenerateReport, project_page_path};
use crate::model::Site;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format a content inventory of a loaded site.
pub fn format_check_output(site: &Site) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Publications".to_string());
    for (i, publication) in site.home.publications.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), publication.title));
        lines.push(format!("{}Id: {}", indent(1), publication.id));
        let authors: String = resolve_authors(publication)
            .into_iter()
            .map(|t| t.display + t.separator)
            .collect();
        if !authors.is_empty() {
            lines.push(format!("{}Authors: {}", indent(1), authors));
        }
        if site.projects.iter().any(|p| p.id == publication.id) {
            lines.push(format!(
                "{}Project: {}",
                indent(1),
                project_page_path(&publication.id).display()
            ));
        }
    }

    lines.push(String::new());
    lines.push("Teaching".to_string());
    for (i, course) in site.home.courses.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            course.name,
            plural(course.semesters.len(), "semester", "semesters")
        ));
    }

    if !site.home.music.is_empty() {
        lines.push(String::new());
        lines.push("Music".to_string());
        lines.push(format!(
            "{}{}",
            indent(1),
            plural(site.home.music.len(), "track", "tracks")
        ));
    }

    lines
}

pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format the pages written by a generation run, then any failures.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![format!("Home → {}", report.home.display())];

    for (i, page) in report.projects.iter().enumerate() {
        lines.push(format!(
            "{} {} {} → {}",
            format_index(i + 1),
            page.id,
            page.title,
            page.path.display()
        ));
    }

    if !report.failures.is_empty() {
        lines.push(String::new());
        lines.push("Failed".to_string());
        for failure in &report.failures {
            lines.push(format!("{}{}: {}", indent(1), failure.id, failure.error));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 home page, {} at {}",
        plural(report.projects.len(), "project page", "project pages"),
        report.output_dir.display()
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
    for failure in &report.failures {
        eprintln!("error: project page '{}' failed: {}", failure.id, failure.error);
    }
}
