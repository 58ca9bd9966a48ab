//! Path cleanup for dropped items.

use std::path::PathBuf;

use percent_encoding::percent_decode_str;

/// Turn dropped text (a path or a `text/uri-list`) into a path.
///
/// Takes the first non-comment line and strips a `file://` prefix with
/// percent decoding. Returns `None` if nothing usable is left.
pub fn clean_dropped_path(text: &str) -> Option<PathBuf> {
    let first = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))?;

    let path = match first.strip_prefix("file://") {
        Some(rest) => percent_decode_str(rest).decode_utf8_lossy().into_owned(),
        None => first.to_string(),
    };

    let path = path.trim();
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Every path in pasted or dropped text, one per non-comment line.
///
/// File managers put copied files on the clipboard as a `text/uri-list`, so
/// pasting them yields the same text a drop would.
pub fn paths_from_text(text: &str) -> Vec<PathBuf> {
    text.lines().filter_map(clean_dropped_path).collect()
}
