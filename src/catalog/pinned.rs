//! Persistence for the user-pinned directory list: a small TOML file in the
//! config dir, read on startup and rewritten whole on every pin toggle.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::CatalogError;
use crate::app::types::Directory;

const PINNED_FILE: &str = "pinned.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PinnedFile {
    #[serde(default)]
    pinned: Vec<Directory>,
}

pub fn pinned_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(PINNED_FILE)
}

/// Load the pinned list. A missing file is an empty list, not an error.
pub fn load(config_dir: &Path) -> Result<Vec<Directory>, CatalogError> {
    let path = pinned_file_path(config_dir);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(&path)?;
    let file: PinnedFile =
        toml::from_str(&text).map_err(|source| CatalogError::Parse { path, source })?;
    Ok(file.pinned)
}

/// Write the full pinned list, creating the config dir if needed.
pub fn save(config_dir: &Path, pinned: &[Directory]) -> Result<(), CatalogError> {
    fs::create_dir_all(config_dir)?;
    let file = PinnedFile {
        pinned: pinned.to_vec(),
    };
    let text = toml::to_string_pretty(&file)?;
    fs::write(pinned_file_path(config_dir), text)?;
    Ok(())
}
