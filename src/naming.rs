//! Slug and display-title derivation for filesystem entry names.
//!
//! Every entry that ends up on the site (category subfolders, video files)
//! is identified by two strings derived from its name on disk:
//!
//! - a **slug**, used in output paths and URLs:
//!   `Tunnel Excavation/` → `tunnel-excavation`
//! - a **display title**, used as link labels and captions:
//!   `crack_propagation-v2.mp4` → "Crack Propagation V2"
//!
//! Both functions are total: any input produces a usable value. Only the last
//! extension is stripped, so `model.v2.mp4` is treated as `model.v2`.

/// Fallback slug for names that contain nothing URL-safe.
pub const FALLBACK_SLUG: &str = "page";

/// Strip the last extension from a name.
///
/// Leading dots do not start an extension (`.hidden` stays `.hidden`), which
/// keeps dotfiles from collapsing to an empty stem.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if name[..pos].chars().any(|c| c != '.') => &name[..pos],
        _ => name,
    }
}

/// Derive a URL-safe slug from an entry name.
///
/// - `"My Model (v2).mp4"` → `"my-model-v2"`
/// - `"Tunnel Excavation"` → `"tunnel-excavation"`
/// - `"stage_1.webm"` → `"stage_1"`
/// - `"???.mp4"` → `"page"`
///
/// The result only contains `[a-z0-9-_]`, never has two hyphens in a row,
/// never starts or ends with a hyphen, and is never empty.
pub fn slug_from_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in strip_extension(name).chars() {
        let mapped = if ch.is_ascii_alphanumeric() || ch == '_' {
            ch.to_ascii_lowercase()
        } else {
            '-'
        };
        if mapped == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(mapped);
    }

    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Derive a display title from an entry name.
///
/// Underscores and hyphens become word breaks, and each word is capitalized
/// (first letter upper, rest lower):
/// - `"crack_propagation-v2.mp4"` → `"Crack Propagation V2"`
/// - `"stage1.mp4"` → `"Stage1"`
/// - `"FEM results"` → `"Fem Results"`
pub fn title_from_name(name: &str) -> String {
    strip_extension(name)
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a string already satisfies the slug invariant.
///
/// Used to validate configured category slugs, which are written by hand.
pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
