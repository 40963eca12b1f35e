// src/store/save.rs
// =============================================================================
// Writes pages into the mirrored directory tree.
//
// Bytes are written exactly as received. Writes are not atomic: if the
// process dies mid-write the file is left truncated.
//
// Two different URLs can map to the same file (see path.rs). The later page
// simply replaces the earlier one, but we remember what we've written this
// run so the overwrite shows up in the log.
// =============================================================================

use crate::error::CrawlError;
use crate::fetch::Page;
use crate::store::derive_path;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug)]
pub struct PageStore {
    root: PathBuf,
    written: HashSet<PathBuf>,
}

impl PageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: HashSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // Saves the page body under the path derived from its final URL
    //
    // Returns: the path written to
    pub async fn save(&mut self, page: &Page) -> Result<PathBuf, CrawlError> {
        let path = derive_path(&page.url, &self.root);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|source| CrawlError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        fs::write(&path, &page.body)
            .await
            .map_err(|source| CrawlError::Write {
                path: path.clone(),
                source,
            })?;

        if !self.written.insert(path.clone()) {
            tracing::warn!(url = %page.url, path = %path.display(), "overwrote a file saved earlier in this run");
        }

        Ok(path)
    }

    /// Number of distinct files written so far
    pub fn files_written(&self) -> usize {
        self.written.len()
    }
}
