//! Filesystem scanning and manifest generation.
//!
//! Stage 1 of the build. Walks the media root for every configured category
//! and produces a [`Manifest`] that the renderer consumes without touching
//! the filesystem again.
//!
//! ## Directory Structure
//!
//! ```text
//! project/
//! ├── config.toml                      # Optional site config
//! ├── assets/videos/                   # Media root
//! │   ├── constitutive-models/         # Category with direct videos
//! │   │   ├── mohr_coulomb.mp4
//! │   │   └── hardening-soil.webm
//! │   └── plaxis/                      # Category with subfolders
//! │       ├── Tunnel Excavation/
//! │       │   ├── stage1.mp4
//! │       │   └── stage2.mp4
//! │       └── Slope Stability/
//! │           └── fos.gif
//! └── docs/                            # Output (see generate)
//! ```
//!
//! ## Rules
//!
//! - A category whose directory is missing is left out of the manifest.
//! - A category with at least one subfolder lists only its subfolders; video
//!   files next to them are ignored.
//! - Only one level of subfolders is read; deeper directories are ignored.
//! - Listings are sorted by case-insensitive name. This order is the order of
//!   links and video blocks on the generated pages.
//! - Two subfolders of one category that derive the same slug would share an
//!   output path. The first in listing order keeps the slug; later ones get a
//!   numeric suffix (`stage-1-2`) and a [`ScanNotice`] is recorded.
//! - Entries whose name is not valid UTF-8 cannot be linked and are skipped
//!   with a [`ScanNotice`].

use crate::config::SiteConfig;
use crate::types::{CategoryContent, CategoryScan, MediaEntry, Subfolder};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Media root relative to the project root. Also the URL segment under the
/// base URL where the videos are served from.
pub const MEDIA_ROOT: &str = "assets/videos";

/// Recognized media extensions, compared case-insensitively.
pub const MEDIA_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "m4v", "gif"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something the scan worked around instead of failing the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanNotice {
    /// A subfolder's slug was already used in its category and was replaced.
    SlugRenamed {
        dir: String,
        name: String,
        taken: String,
        slug: String,
    },
    /// A directory entry was skipped because its name is not valid UTF-8.
    NonUtf8Name { path: String },
}

/// Manifest output from the scan stage.
#[derive(Debug, Default, Serialize)]
pub struct Manifest {
    /// Categories whose directory exists, in configured order.
    pub categories: Vec<CategoryScan>,
    pub notices: Vec<ScanNotice>,
}

/// A directory entry kept by a listing, with its name already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Scan the media root of a project for every configured category.
pub fn scan(root: &Path, config: &SiteConfig) -> Result<Manifest, ScanError> {
    let media_root = root.join(MEDIA_ROOT);
    let mut manifest = Manifest::default();

    for category in &config.categories {
        let dir = media_root.join(&category.slug);
        if !dir.is_dir() {
            continue;
        }
        let content = scan_category(&dir, &mut manifest.notices)?;
        manifest.categories.push(CategoryScan {
            category: category.clone(),
            content,
        });
    }

    Ok(manifest)
}

/// Decide what a category page shows: its subfolders if it has any,
/// otherwise the videos directly inside it.
pub fn scan_category(
    dir: &Path,
    notices: &mut Vec<ScanNotice>,
) -> Result<CategoryContent, ScanError> {
    let subdirs = list_subfolders(dir, notices)?;
    if subdirs.is_empty() {
        return Ok(CategoryContent::DirectVideos(list_media(dir, notices)?));
    }

    let mut subfolders = Vec::with_capacity(subdirs.len());
    for subdir in subdirs {
        let media = list_media(&subdir.path, notices)?;
        subfolders.push(Subfolder::new(subdir.name, media));
    }
    assign_unique_slugs(&mut subfolders, dir, notices);
    Ok(CategoryContent::Subfolders(subfolders))
}

/// Give every subfolder a distinct slug.
///
/// Subfolders keep their derived slug unless an earlier one already claimed
/// it. A repeat becomes `{slug}-{n}` with the smallest `n >= 2` that no other
/// subfolder uses or derives naturally.
fn assign_unique_slugs(subfolders: &mut [Subfolder], dir: &Path, notices: &mut Vec<ScanNotice>) {
    let natural: HashSet<String> = subfolders.iter().map(|s| s.slug.clone()).collect();
    let mut taken: HashSet<String> = HashSet::new();

    for sub in subfolders.iter_mut() {
        if taken.insert(sub.slug.clone()) {
            continue;
        }
        let mut n = 2;
        let slug = loop {
            let candidate = format!("{}-{n}", sub.slug);
            if !natural.contains(&candidate) && !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        taken.insert(slug.clone());
        let previous = std::mem::replace(&mut sub.slug, slug.clone());
        notices.push(ScanNotice::SlugRenamed {
            dir: dir.display().to_string(),
            name: sub.name.clone(),
            taken: previous,
            slug,
        });
    }
}

/// List the media files directly inside `folder`.
///
/// Returns an empty list if the folder does not exist. Only regular files
/// with a recognized extension are kept.
pub fn list_media(
    folder: &Path,
    notices: &mut Vec<ScanNotice>,
) -> Result<Vec<MediaEntry>, ScanError> {
    let files = collect_sorted(folder, is_media, notices)?;
    Ok(files
        .into_iter()
        .map(|entry| MediaEntry::from_filename(entry.name))
        .collect())
}

/// List the directories directly inside `folder`.
///
/// Returns an empty list if the folder does not exist.
pub fn list_subfolders(
    folder: &Path,
    notices: &mut Vec<ScanNotice>,
) -> Result<Vec<FolderEntry>, ScanError> {
    collect_sorted(folder, |p| p.is_dir(), notices)
}

/// Read a directory, keep entries matching `keep`, and sort them by
/// case-insensitive name. Ties fall back to the exact name so the order is
/// total regardless of what `read_dir` returns.
fn collect_sorted(
    folder: &Path,
    keep: impl Fn(&Path) -> bool,
    notices: &mut Vec<ScanNotice>,
) -> Result<Vec<FolderEntry>, ScanError> {
    if !folder.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !keep(&path) {
            continue;
        }
        let name = path.file_name().and_then(|n| n.to_str());
        let Some(name) = name.map(str::to_owned) else {
            let path = path.display().to_string();
            notices.push(ScanNotice::NonUtf8Name { path });
            continue;
        };
        entries.push(FolderEntry { name, path });
    }

    entries.sort_by_cached_key(|e| (e.name.to_lowercase(), e.name.clone()));
    Ok(entries)
}

fn is_media(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    MEDIA_EXTENSIONS.contains(&ext.as_str())
}
