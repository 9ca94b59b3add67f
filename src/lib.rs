//! # reelsite
//!
//! A minimal static site generator for libraries of videos and animations.
//! The filesystem is the data source: each configured category maps to a
//! directory under `assets/videos/`, which holds either video files or one
//! level of named subfolders of video files.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      assets/videos/  →  Manifest      (filesystem → structured data)
//! 2. Generate  Manifest        →  docs/*.html   (header + body + footer)
//! ```
//!
//! The scan stage is the only code that lists directories, and the renderer
//! is a pure function of the manifest, the config, and the template
//! fragments. Regenerating from an unchanged tree writes byte-identical
//! pages.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists categories, subfolders, and media files in a deterministic order |
//! | [`generate`] | Stage 2 — renders index, category, and subfolder pages with Maud and writes them |
//! | [`templates`] | Loads the `_template_top.html` / `_template_bottom.html` fragments |
//! | [`config`] | `config.toml` loading, stock defaults, and validation |
//! | [`types`] | Shared types between stages (`MediaEntry`, `Subfolder`, `CategoryContent`) |
//! | [`naming`] | Slug and display-title derivation from file and directory names |
//! | [`output`] | CLI output formatting for the inventory and build progress |
//!
//! # Design Decisions
//!
//! ## Subfolders or Videos, Not Both
//!
//! A category page either links to subfolder pages or embeds the category's
//! own videos. The choice is the [`types::CategoryContent`] enum, decided once
//! during the scan, so the renderer only matches on it.
//!
//! ## Stable Names From Disk
//!
//! Output paths use slugs derived from names on disk
//! (`Tunnel Excavation/` → `tunnel-excavation.html`), while video URLs keep
//! the original names so they resolve against the served `assets/` tree.
//! Listings are sorted case-insensitively, which fixes the order of links
//! and players on every page.
//!
//! ## Maud for Bodies, Verbatim Fragments
//!
//! Bodies are generated with Maud, so every interpolated title and file name
//! is HTML-escaped. The header and footer fragments belong to the site author
//! and are concatenated as-is.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
