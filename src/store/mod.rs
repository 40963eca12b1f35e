// src/store/mod.rs
// =============================================================================
// Saving fetched pages to disk.
//
// Submodules:
// - path: turns a URL into a file path under the destination directory
// - save: writes raw page bytes there, creating directories as needed
// =============================================================================

mod path;
mod save;

pub use path::derive_path;
pub use save::PageStore;
