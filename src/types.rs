//! Shared types passed from the scan stage to rendering and console output.
//!
//! Everything here is derived fresh on each run from the filesystem; nothing
//! is persisted except the generated HTML.

use crate::config::Category;
use crate::naming::{slug_from_name, title_from_name};
use serde::Serialize;

/// A playable file with a recognized media extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaEntry {
    /// File name as found on disk, extension included. Used verbatim in
    /// asset URLs.
    pub filename: String,
    /// Display title derived from the file name.
    pub title: String,
    /// URL-safe slug derived from the file name.
    pub slug: String,
}

impl MediaEntry {
    pub fn from_filename(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            title: title_from_name(&filename),
            slug: slug_from_name(&filename),
            filename,
        }
    }
}

/// A directory one level under a category, with its media files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subfolder {
    /// Directory name as found on disk. Used verbatim in asset URLs.
    pub name: String,
    pub title: String,
    pub slug: String,
    pub media: Vec<MediaEntry>,
}

impl Subfolder {
    pub fn new(name: impl Into<String>, media: Vec<MediaEntry>) -> Self {
        let name = name.into();
        Self {
            title: title_from_name(&name),
            slug: slug_from_name(&name),
            name,
            media,
        }
    }
}

/// What a category page shows.
///
/// A category either links to its subfolders or embeds the videos sitting
/// directly in its directory, never both. When subfolders exist, loose files
/// next to them are not listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum CategoryContent {
    Subfolders(Vec<Subfolder>),
    /// May be empty, in which case the page shows a placeholder.
    DirectVideos(Vec<MediaEntry>),
}

impl CategoryContent {
    /// Total number of media files reachable from the category page.
    pub fn media_count(&self) -> usize {
        match self {
            CategoryContent::Subfolders(subs) => subs.iter().map(|s| s.media.len()).sum(),
            CategoryContent::DirectVideos(media) => media.len(),
        }
    }
}

/// A configured category whose directory exists, with its scanned content.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScan {
    pub category: Category,
    pub content: CategoryContent,
}

impl CategoryScan {
    /// Subfolders to render pages for (empty for direct-video categories).
    pub fn subfolders(&self) -> &[Subfolder] {
        match &self.content {
            CategoryContent::Subfolders(subs) => subs.as_slice(),
            CategoryContent::DirectVideos(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_entry_derives_title_and_slug() {
        let entry = MediaEntry::from_filename("crack_propagation-v2.mp4");
        assert_eq!(entry.filename, "crack_propagation-v2.mp4");
        assert_eq!(entry.title, "Crack Propagation V2");
        assert_eq!(entry.slug, "crack_propagation-v2");
    }

    #[test]
    fn subfolder_derives_title_and_slug() {
        let sub = Subfolder::new("Tunnel Excavation", vec![]);
        assert_eq!(sub.title, "Tunnel Excavation");
        assert_eq!(sub.slug, "tunnel-excavation");
    }

    #[test]
    fn media_count_sums_subfolders() {
        let content = CategoryContent::Subfolders(vec![
            Subfolder::new("a", vec![MediaEntry::from_filename("1.mp4")]),
            Subfolder::new(
                "b",
                vec![
                    MediaEntry::from_filename("2.mp4"),
                    MediaEntry::from_filename("3.mp4"),
                ],
            ),
        ]);
        assert_eq!(content.media_count(), 3);
        assert_eq!(CategoryContent::DirectVideos(vec![]).media_count(), 0);
    }

    #[test]
    fn direct_video_category_has_no_subfolder_pages() {
        let scan = CategoryScan {
            category: Category::new("plaxis", "PLAXIS"),
            content: CategoryContent::DirectVideos(vec![MediaEntry::from_filename("a.mp4")]),
        };
        assert!(scan.subfolders().is_empty());
    }
}
