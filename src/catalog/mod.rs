//! Category providers feeding the sidebar: quick-access home folders,
//! user-pinned directories and mounted disks. Each provider returns a plain
//! `Vec<Directory>`; the sidebar builder owns the layout.

pub mod error;
pub mod pinned;

pub use error::CatalogError;

use directories_next::UserDirs;
use std::path::Path;
#[cfg(target_os = "linux")]
use std::path::PathBuf;

use crate::app::types::Directory;

/// Quick-access list: the home directory followed by the well-known user
/// folders that actually exist on this machine. Insertion order is the
/// display order.
pub fn home_directories() -> Vec<Directory> {
    let Some(user_dirs) = UserDirs::new() else {
        return Vec::new();
    };
    let mut dirs = vec![Directory::new("Home", user_dirs.home_dir())];
    let known: [(&str, Option<&Path>); 6] = [
        ("Documents", user_dirs.document_dir()),
        ("Downloads", user_dirs.download_dir()),
        ("Desktop", user_dirs.desktop_dir()),
        ("Pictures", user_dirs.picture_dir()),
        ("Music", user_dirs.audio_dir()),
        ("Videos", user_dirs.video_dir()),
    ];
    for (name, path) in known {
        if let Some(p) = path {
            if p.is_dir() {
                dirs.push(Directory::new(name, p));
            }
        }
    }
    dirs
}

/// Mounted-disk list. On Linux this is the root filesystem plus anything
/// mounted under the usual removable-media prefixes; elsewhere the category
/// is empty and the sidebar shows only its divider.
#[cfg(target_os = "linux")]
pub fn disk_directories() -> Vec<Directory> {
    let Ok(mounts) = std::fs::read_to_string("/proc/mounts") else {
        return Vec::new();
    };
    let mut disks: Vec<Directory> = Vec::new();
    for line in mounts.lines() {
        let Some(raw) = line.split_whitespace().nth(1) else {
            continue;
        };
        let mount_point = PathBuf::from(unescape_mount_point(raw));
        if !is_disk_mount(&mount_point) {
            continue;
        }
        if disks.iter().any(|d| d.location == mount_point) {
            continue;
        }
        disks.push(Directory::new(disk_name(&mount_point), mount_point));
    }
    disks.sort_by(|a, b| a.location.cmp(&b.location));
    disks
}

#[cfg(not(target_os = "linux"))]
pub fn disk_directories() -> Vec<Directory> {
    Vec::new()
}

#[cfg(target_os = "linux")]
fn is_disk_mount(path: &Path) -> bool {
    path == Path::new("/")
        || path.starts_with("/media")
        || path.starts_with("/run/media")
        || path.starts_with("/mnt")
}

#[cfg(any(target_os = "linux", test))]
fn disk_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Root".to_string())
}

/// `/proc/mounts` escapes space, tab, newline and backslash as octal.
#[cfg(target_os = "linux")]
fn unescape_mount_point(raw: &str) -> String {
    raw.replace("\\040", " ")
        .replace("\\011", "\t")
        .replace("\\012", "\n")
        .replace("\\134", "\\")
}
