//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scan [`Manifest`] and renders the final
//! static pages, each wrapped in the author's header and footer fragments.
//!
//! ## Generated Pages
//!
//! - **Index page** (`index.html`): one link per category present on disk
//! - **Category pages** (`{category}.html`): either links to the category's
//!   subfolders, or one embedded video per file in the category directory
//! - **Subfolder pages** (`{category}/{subfolder}.html`): embedded videos of
//!   one subfolder, with links back to the category and the index
//!
//! ## Output Structure
//!
//! ```text
//! docs/
//! ├── _template_top.html          # Author-supplied, read not written
//! ├── _template_bottom.html
//! ├── index.html
//! ├── constitutive-models.html    # Direct-video category
//! ├── plaxis.html                 # Subfolder category
//! └── plaxis/
//!     ├── slope-stability.html
//!     └── tunnel-excavation.html
//! ```
//!
//! All links are absolute under the configured base URL. Video sources point
//! at `{base_url}/assets/videos/...` using the names found on disk.
//!
//! ## HTML Generation
//!
//! Page bodies use [maud](https://maud.lambda.xyz/), so titles, file names
//! and URLs are HTML-escaped on interpolation. The template fragments are
//! inserted verbatim.

use crate::config::{Category, SiteConfig};
use crate::scan::{MEDIA_ROOT, Manifest};
use crate::templates::Templates;
use crate::types::{CategoryContent, CategoryScan, MediaEntry, Subfolder};
use maud::{Markup, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Which of the three page shapes a rendered page is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Index,
    Category,
    Subfolder,
}

/// A fully rendered page and where it goes under the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub kind: PageKind,
    /// Output path relative to the output directory, `/`-separated.
    pub path: String,
    pub html: String,
}

/// Render every page and write it under `output_dir`.
///
/// Pages are written in order: index, then each category followed by its
/// subfolder pages. The first failed write aborts the build; pages already
/// written stay on disk.
pub fn generate(
    manifest: &Manifest,
    config: &SiteConfig,
    templates: &Templates,
    output_dir: &Path,
) -> Result<Vec<RenderedPage>, GenerateError> {
    let pages = render_site(manifest, config, templates);
    for page in &pages {
        write_page(output_dir, page)?;
    }
    Ok(pages)
}

/// Render all pages of the site without touching the filesystem.
pub fn render_site(
    manifest: &Manifest,
    config: &SiteConfig,
    templates: &Templates,
) -> Vec<RenderedPage> {
    let base = config.base_url.as_str();
    let mut pages = Vec::new();

    pages.push(RenderedPage {
        kind: PageKind::Index,
        path: index_page_path(),
        html: templates.wrap(&render_index(manifest, config).into_string()),
    });

    for scan in &manifest.categories {
        pages.push(RenderedPage {
            kind: PageKind::Category,
            path: category_page_path(&scan.category.slug),
            html: templates.wrap(&render_category(scan, base).into_string()),
        });

        for subfolder in scan.subfolders() {
            let body = render_subfolder(&scan.category, subfolder, base).into_string();
            pages.push(RenderedPage {
                kind: PageKind::Subfolder,
                path: subfolder_page_path(&scan.category.slug, &subfolder.slug),
                html: templates.wrap(&body),
            });
        }
    }

    pages
}

fn write_page(output_dir: &Path, page: &RenderedPage) -> Result<(), GenerateError> {
    let path = output_dir.join(&page.path);
    let io_err = |source: io::Error| GenerateError::Write {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(&path, &page.html).map_err(io_err)
}

// ============================================================================
// Paths and URLs
// ============================================================================

pub fn index_page_path() -> String {
    "index.html".to_string()
}

pub fn category_page_path(category_slug: &str) -> String {
    format!("{category_slug}.html")
}

pub fn subfolder_page_path(category_slug: &str, subfolder_slug: &str) -> String {
    format!("{category_slug}/{subfolder_slug}.html")
}

/// Absolute link to a page under the base URL.
fn page_url(base: &str, page_path: &str) -> String {
    format!("{base}/{page_path}")
}

/// Absolute URL of a media file. `dirs` are the directory names between the
/// media root and the file, as found on disk.
fn media_url(base: &str, dirs: &[&str], filename: &str) -> String {
    let mut url = format!("{base}/{MEDIA_ROOT}");
    for dir in dirs {
        url.push('/');
        url.push_str(dir);
    }
    url.push('/');
    url.push_str(filename);
    url
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index body: one link per category present on disk.
fn render_index(manifest: &Manifest, config: &SiteConfig) -> Markup {
    let base = config.base_url.as_str();
    html! {
        h1 { (config.title) }
        p { (config.tagline) }
        ul {
            @for scan in &manifest.categories {
                li {
                    a href=(page_url(base, &category_page_path(&scan.category.slug))) {
                        (scan.category.title)
                    }
                }
            }
        }
    }
}

/// Renders a category body: subfolder links or the category's own videos.
fn render_category(scan: &CategoryScan, base: &str) -> Markup {
    let category = &scan.category;
    html! {
        h1 { (category.title) }
        @match &scan.content {
            CategoryContent::Subfolders(subfolders) => {
                ul {
                    @for subfolder in subfolders {
                        li {
                            @let href = page_url(base, &subfolder_page_path(&category.slug, &subfolder.slug));
                            a href=(href) {
                                (subfolder.title)
                            }
                        }
                    }
                }
            }
            CategoryContent::DirectVideos(media) => {
                @if media.is_empty() {
                    p { "No videos available yet." }
                }
                @for entry in media {
                    @let src = media_url(base, &[category.slug.as_str()], &entry.filename);
                    (video_block(&src, entry))
                }
            }
        }
        p {
            a href=(page_url(base, &index_page_path())) { "Back to home" }
        }
    }
}

/// Renders a subfolder body: its videos plus links back up the hierarchy.
fn render_subfolder(category: &Category, subfolder: &Subfolder, base: &str) -> Markup {
    html! {
        h1 { (subfolder.title) }
        p { "Category: " (category.title) }
        @if subfolder.media.is_empty() {
            p { "No videos available." }
        }
        @for entry in &subfolder.media {
            @let src = media_url(
                base,
                &[category.slug.as_str(), subfolder.name.as_str()],
                &entry.filename,
            );
            (video_block(&src, entry))
        }
        p {
            a href=(page_url(base, &category_page_path(&category.slug))) {
                "Back to " (category.title)
            }
            " | "
            a href=(page_url(base, &index_page_path())) { "Home" }
        }
    }
}

/// One embedded player with its caption.
fn video_block(src: &str, entry: &MediaEntry) -> Markup {
    html! {
        section {
            video controls {
                source src=(src);
            }
            p { "Animation: " (entry.title) }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
