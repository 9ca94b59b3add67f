//! Header and footer fragments wrapped around every generated page.
//!
//! The fragments are opaque HTML owned by the site author: the generator
//! never parses or escapes them, it concatenates `top + body + bottom`.
//! Both are required; a missing fragment aborts the build.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TEMPLATE_TOP: &str = "_template_top.html";
pub const TEMPLATE_BOTTOM: &str = "_template_bottom.html";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Missing template fragment: {0}")]
    Missing(PathBuf),
    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The page header and footer, read once per build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub top: String,
    pub bottom: String,
}

impl Templates {
    /// Read both fragments from `dir`.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        Ok(Self {
            top: read_fragment(&dir.join(TEMPLATE_TOP))?,
            bottom: read_fragment(&dir.join(TEMPLATE_BOTTOM))?,
        })
    }

    /// Wrap a rendered body with the header and footer.
    pub fn wrap(&self, body: &str) -> String {
        let mut page = String::with_capacity(self.top.len() + body.len() + self.bottom.len());
        page.push_str(&self.top);
        page.push_str(body);
        page.push_str(&self.bottom);
        page
    }
}

fn read_fragment(path: &Path) -> Result<String, TemplateError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TemplateError::Missing(path.to_path_buf()),
        _ => TemplateError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_reads_both_fragments() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(TEMPLATE_TOP), "<html><body>").unwrap();
        fs::write(tmp.path().join(TEMPLATE_BOTTOM), "</body></html>").unwrap();

        let templates = Templates::load(tmp.path()).unwrap();
        assert_eq!(templates.top, "<html><body>");
        assert_eq!(templates.bottom, "</body></html>");
    }

    #[test]
    fn missing_bottom_is_reported_with_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(TEMPLATE_TOP), "<html>").unwrap();

        match Templates::load(tmp.path()) {
            Err(TemplateError::Missing(path)) => {
                assert_eq!(path, tmp.path().join(TEMPLATE_BOTTOM));
            }
            other => panic!("expected missing template, got {other:?}"),
        }
    }

    #[test]
    fn missing_directory_is_missing_template() {
        let tmp = TempDir::new().unwrap();
        let err = Templates::load(&tmp.path().join("docs")).unwrap_err();
        assert!(matches!(err, TemplateError::Missing(_)));
    }

    #[test]
    fn wrap_concatenates_verbatim() {
        let templates = Templates {
            top: "<header>&amp;</header>".into(),
            bottom: "<footer/>".into(),
        };
        assert_eq!(
            templates.wrap("<main/>"),
            "<header>&amp;</header><main/><footer/>"
        );
    }
}
