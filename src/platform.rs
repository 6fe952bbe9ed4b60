//! Directory and file resolution.
//!
//! The catalog export is looked up through a fallback chain so the tool works
//! both when pointed at a file explicitly and when run next to an export.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = ".lecture-planner";
pub const CATALOG_FILE: &str = "autosave.json";

/// `~/.lecture-planner`
pub fn config_dir() -> Result<PathBuf> {
    let home = home::home_dir().context("Could not find home directory")?;
    Ok(home.join(APP_DIR))
}

/// Candidate locations for the catalog, highest priority first.
///
/// 1. Explicit `--catalog` flag
/// 2. `catalog.path` from config
/// 3. `./autosave.json`
/// 4. `autosave.json` next to the executable
/// 5. Platform data directory (`~/.local/share/lecture-planner` on Linux)
pub fn catalog_candidates(flag: Option<&Path>, configured: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    candidates.extend(flag.map(Path::to_path_buf));
    candidates.extend(configured.map(Path::to_path_buf));
    candidates.push(PathBuf::from(CATALOG_FILE));

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(CATALOG_FILE));
    }

    if let Some(data) = dirs::data_local_dir() {
        candidates.push(data.join("lecture-planner").join(CATALOG_FILE));
    }

    candidates
}

/// First existing candidate. An explicit flag is never skipped over.
pub fn resolve_catalog_path(flag: Option<&Path>, configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        if !path.is_file() {
            anyhow::bail!("Catalog file not found: {}", path.display());
        }
        return Ok(path.to_path_buf());
    }

    let candidates = catalog_candidates(None, configured);
    for candidate in &candidates {
        tracing::debug!(path = %candidate.display(), "Trying catalog location");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    let tried = candidates
        .iter()
        .map(|p| format!("  {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::bail!(
        "No catalog file found. Pass --catalog or set catalog.path in config. Tried:\n{}",
        tried
    )
}
