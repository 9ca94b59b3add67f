//! Shared test utilities for the reelsite test suite.
//!
//! Builds throwaway project trees in a `TempDir`:
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let project = setup_project();
//! add_videos(&project.path().join("assets/videos/plaxis/Tunnel Excavation"), &["stage1.mp4"]);
//! let config = config_with(&[("plaxis", "PLAXIS")]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::{Category, SiteConfig};
use crate::templates::{TEMPLATE_BOTTOM, TEMPLATE_TOP};

// =========================================================================
// Fixture setup
// =========================================================================

/// A temp project with the default output dir and both template fragments.
pub fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join(TEMPLATE_TOP), "<html><body>\n").unwrap();
    fs::write(docs.join(TEMPLATE_BOTTOM), "\n</body></html>\n").unwrap();
    tmp
}

/// Create empty files in `dir`, which must exist.
pub fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

/// Create `dir` (and parents) and put empty files named `names` in it.
pub fn add_videos(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    touch(dir, names);
}

/// Default config with the category list replaced.
pub fn config_with(categories: &[(&str, &str)]) -> SiteConfig {
    SiteConfig {
        categories: categories
            .iter()
            .map(|(slug, title)| Category::new(*slug, *title))
            .collect(),
        ..SiteConfig::default()
    }
}
