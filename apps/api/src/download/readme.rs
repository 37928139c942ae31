use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::download::archive::{INDEX_FILE, README_FILE, RESUME_FILE};
use crate::models::{non_blank, PortfolioData};
use crate::portfolio::compute_completeness_report;
use crate::render::Theme;

/// README.md shipped next to `index.html`.
///
/// The only archive entry that is not a pure function of the request: it carries
/// the generation date.
pub fn generate_readme(data: &PortfolioData, theme: Theme, generated_at: DateTime<Utc>) -> String {
    let owner = non_blank(&data.personal.name).unwrap_or("Your");
    let report = compute_completeness_report(data);

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {owner}'s Portfolio");
    out.push_str("\nThis portfolio was generated using the Portfolio Generator.\n");

    out.push_str("\n## Files Included\n");
    let _ = writeln!(out, "- {INDEX_FILE} - Your complete portfolio website");
    if data.has_resume() {
        let _ = writeln!(out, "- {RESUME_FILE} - Your resume file");
    }
    let _ = writeln!(out, "- {README_FILE} - This file");

    out.push_str("\n## How to Use\n");
    let _ = writeln!(out, "1. Open {INDEX_FILE} in any web browser to view your portfolio");
    out.push_str("2. Upload the files to any web hosting service to make it live\n");
    out.push_str("3. Customize the HTML/CSS as needed\n");

    let _ = writeln!(out, "\n## Template: {} ({})", theme.label(), theme.id());
    let _ = writeln!(out, "\nGenerated on: {}", generated_at.format("%Y-%m-%d"));

    out.push_str("\n## Sections Included\n");
    for coverage in &report.sections {
        let mark = if coverage.included { 'x' } else { ' ' };
        let _ = writeln!(out, "- [{mark}] {}", coverage.section.label());
    }

    out.push_str("\nEnjoy your new portfolio!\n");
    out
}
