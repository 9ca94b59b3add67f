//! CLI output formatting for the build stages.
//!
//! # Output Format
//!
//! ## Check (scan inventory)
//!
//! ```text
//! Categories
//! 001 Constitutive Models (2 videos)
//!     Source: constitutive-models/
//!     001 Mohr Coulomb
//!         Source: mohr_coulomb.mp4
//!     002 Hardening Soil
//!         Source: hardening-soil.webm
//! 002 PLAXIS (1 video)
//!     Source: plaxis/
//!     001 Tunnel Excavation (1 video)
//!         Source: Tunnel Excavation/
//!         001 Stage1
//!             Source: stage1.mp4
//! ```
//!
//! ## Build
//!
//! ```text
//! Generating site for /animations
//! ✔ docs/index.html
//! ✔ docs/plaxis.html
//!   ✔ docs/plaxis/tunnel-excavation.html
//! Generated 1 index page, 1 category page, 1 subfolder page
//! ```
//!
//! ## Notices (stderr)
//!
//! ```text
//! warning: assets/videos/plaxis: subfolder "stage-1" also maps to 'stage-1', writing it as 'stage-1-2'
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout, or stderr for
//! notices. Format functions are pure: no I/O, no side effects.

use crate::generate::{PageKind, RenderedPage};
use crate::scan::{Manifest, ScanNotice};
use crate::types::{CategoryContent, MediaEntry};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn video_count(n: usize) -> String {
    match n {
        1 => "1 video".to_string(),
        n => format!("{n} videos"),
    }
}

fn page_count(n: usize, label: &str) -> String {
    match n {
        1 => format!("1 {label} page"),
        n => format!("{n} {label} pages"),
    }
}

/// Format an entity header: positional index + title, with optional count.
///
/// ```text
/// 001 PLAXIS (3 videos)
/// 002 Stage1
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} {} ({})", format_index(index), title, video_count(n)),
        None => format!("{} {}", format_index(index), title),
    }
}

fn media_lines(media: &[MediaEntry], depth: usize, lines: &mut Vec<String>) {
    for (i, entry) in media.iter().enumerate() {
        lines.push(format!("{}{}", indent(depth), entity_header(i + 1, &entry.title, None)));
        lines.push(format!("{}Source: {}", indent(depth + 1), entry.filename));
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the scan inventory: categories, subfolders, and videos in page order.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];

    if manifest.categories.is_empty() {
        lines.push(format!("{}(no category directories found)", indent(1)));
        return lines;
    }

    for (i, scan) in manifest.categories.iter().enumerate() {
        lines.push(entity_header(
            i + 1,
            &scan.category.title,
            Some(scan.content.media_count()),
        ));
        lines.push(format!("{}Source: {}/", indent(1), scan.category.slug));

        match &scan.content {
            CategoryContent::Subfolders(subfolders) => {
                for (j, sub) in subfolders.iter().enumerate() {
                    lines.push(format!(
                        "{}{}",
                        indent(1),
                        entity_header(j + 1, &sub.title, Some(sub.media.len()))
                    ));
                    lines.push(format!("{}Source: {}/", indent(2), sub.name));
                    media_lines(&sub.media, 2, &mut lines);
                }
            }
            CategoryContent::DirectVideos(media) => media_lines(media, 1, &mut lines),
        }
    }

    lines
}

/// Print the scan inventory to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Scan notices
// ============================================================================

/// One warning line per notice, in the order the scan recorded them.
pub fn format_notices(notices: &[ScanNotice]) -> Vec<String> {
    notices
        .iter()
        .map(|notice| match notice {
            ScanNotice::SlugRenamed {
                dir,
                name,
                taken,
                slug,
            } => format!(
                "warning: {dir}: subfolder {name:?} also maps to '{taken}', writing it as '{slug}'"
            ),
            ScanNotice::NonUtf8Name { path } => {
                format!("warning: skipping {path}: name is not valid UTF-8")
            }
        })
        .collect()
}

/// Print scan notices to stderr.
pub fn print_notices(notices: &[ScanNotice]) {
    for line in format_notices(notices) {
        eprintln!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

pub fn format_build_start(base_url: &str) -> String {
    format!("Generating site for {base_url}")
}

/// Format one line per written page plus a summary.
///
/// `output_label` is the output directory as the user should see it, e.g.
/// `docs`. Subfolder pages are indented under their category.
pub fn format_generate_output(pages: &[RenderedPage], output_label: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(pages.len() + 1);
    let (mut index, mut categories, mut subfolders) = (0, 0, 0);

    for page in pages {
        let prefix = match page.kind {
            PageKind::Index => {
                index += 1;
                ""
            }
            PageKind::Category => {
                categories += 1;
                ""
            }
            PageKind::Subfolder => {
                subfolders += 1;
                "  "
            }
        };
        lines.push(format!("{prefix}\u{2714} {output_label}/{}", page.path));
    }

    lines.push(format!(
        "Generated {}, {}, {}",
        page_count(index, "index"),
        page_count(categories, "category"),
        page_count(subfolders, "subfolder")
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(pages: &[RenderedPage], output_label: &str) {
    for line in format_generate_output(pages, output_label) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
