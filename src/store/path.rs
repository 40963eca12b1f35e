// src/store/path.rs
// =============================================================================
// Maps a page URL to a file path under the destination directory.
//
//   http://host/ebook/1/          -> <dest>/ebook/1/index.html
//   http://host/ebook/1/2.html    -> <dest>/ebook/1/2.html
//   http://host/                  -> <dest>/index.html
//
// Only the URL path is used: host, query string and fragment are ignored,
// so two URLs differing only in their query map to the same file.
// =============================================================================

use std::path::{Path, PathBuf};
use url::Url;

/// File name used for directory-style URLs (path ending in '/')
pub const DEFAULT_FILE_NAME: &str = "index.html";

pub fn derive_path(url: &Url, root: &Path) -> PathBuf {
    // "/ebook/1/2.html" -> ["", "ebook", "1", "2.html"]
    // The leading "" comes from the leading slash
    let mut segments: Vec<&str> = url.path().split('/').skip(1).collect();

    let file_name = match segments.pop() {
        Some(last) if !last.is_empty() => last,
        _ => DEFAULT_FILE_NAME,
    };

    let mut path = root.to_path_buf();
    for dir in segments.into_iter().filter(|s| !s.is_empty()) {
        path.push(dir);
    }
    path.push(file_name);
    path
}
