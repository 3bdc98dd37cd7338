//! Data-driven tuning for the starblitz core.
//!
//! Every database loads from `data/config/*.toml` when the workspace data
//! directory is present and falls back to built-in defaults otherwise, so
//! library consumers and tests never depend on files on disk.

pub mod configs;
pub mod specs;

/// Workspace data root: prefer the repository `data/` dir, else a local one.
pub(crate) fn data_root() -> std::path::PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}
