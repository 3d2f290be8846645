use directories_next::ProjectDirs;
use std::path::PathBuf;

/// Platform config dir for this application (e.g. `~/.config/filedock`).
/// Falls back to the current directory when the home dir cannot be
/// determined, which only happens in stripped-down environments.
pub fn project_config_dir() -> PathBuf {
    ProjectDirs::from("", "", "filedock")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Platform cache dir, used for the log file.
pub fn user_cache_dir() -> PathBuf {
    ProjectDirs::from("", "", "filedock")
        .map(|d| d.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
