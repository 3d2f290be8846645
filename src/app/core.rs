use std::path::PathBuf;

use tracing::debug;

use crate::app::settings::Settings;
use crate::app::sidebar::{form_directory_slice, SidebarModel};
use crate::app::types::Directory;
use crate::catalog;

/// Application state driving the sidebar panel.
///
/// Owns the single `SidebarModel` instance plus the data feeding it: the
/// loaded settings and the pinned-directory list. The home and disk
/// categories are re-read from the system on every rebuild; the pinned list
/// is the only category this struct mutates and persists.
pub struct App {
    pub sidebar: SidebarModel,
    pub settings: Settings,
    pub pinned: Vec<Directory>,
    /// Directory shown in the main pane after a confirm on the sidebar.
    pub current: Option<PathBuf>,
    /// Where settings and the pinned list are persisted.
    pub config_dir: PathBuf,
}

impl App {
    /// Build the application state, loading settings and pinned directories
    /// from `config_dir`. Missing files fall back to defaults; a missing
    /// config dir is created on the first save, not here.
    pub fn new(config_dir: PathBuf) -> Self {
        let settings = Settings::load(&config_dir).unwrap_or_default();
        let pinned = catalog::pinned::load(&config_dir).unwrap_or_default();
        let mut app = App {
            sidebar: SidebarModel::default(),
            settings,
            pinned,
            current: None,
            config_dir,
        };
        app.refresh_sidebar();
        app
    }

    /// Rebuild the sidebar's logical sequence from the three category
    /// providers. Always a full rebuild so row indices stay exact; the
    /// cursor is re-normalized only when the new sequence invalidated it.
    pub fn refresh_sidebar(&mut self) {
        let home = catalog::home_directories();
        let disk = catalog::disk_directories();
        debug!(
            home = home.len(),
            pinned = self.pinned.len(),
            disk = disk.len(),
            "rebuilding sidebar catalog"
        );
        self.sidebar.directories = form_directory_slice(home, self.pinned.clone(), disk);
        if self.sidebar.is_cursor_invalid() {
            self.sidebar.reset_cursor();
        }
        let last = self.sidebar.directories.len().saturating_sub(1);
        self.sidebar.render_index = self.sidebar.render_index.min(last);
    }

    /// Pin the selected directory, or unpin it when already pinned, then
    /// persist the list and rebuild. Does nothing when the cursor is not on
    /// a selectable row.
    pub fn toggle_pin(&mut self) -> Result<(), catalog::CatalogError> {
        let Some(dir) = self.sidebar.selected_directory().cloned() else {
            return Ok(());
        };
        match self.pinned.iter().position(|d| d.location == dir.location) {
            Some(i) => {
                self.pinned.remove(i);
                debug!(path = %dir.location.display(), "unpinned directory");
            }
            None => {
                self.pinned.push(dir.clone());
                debug!(path = %dir.location.display(), "pinned directory");
            }
        }
        catalog::pinned::save(&self.config_dir, &self.pinned)?;
        self.refresh_sidebar();
        Ok(())
    }

    /// Open the selected directory in the main pane. Refuses divider and
    /// empty selections via the cursor-validity predicate.
    pub fn open_selected(&mut self) {
        if let Some(dir) = self.sidebar.selected_directory() {
            self.current = Some(dir.location.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::SidebarEntry;

    fn test_app(dir: &std::path::Path) -> App {
        App::new(dir.to_path_buf())
    }

    #[test]
    fn refresh_builds_two_divider_layout() {
        let temp = tempfile::tempdir().unwrap();
        let app = test_app(temp.path());
        let dividers = app
            .sidebar
            .directories
            .iter()
            .filter(|e| e.is_divider())
            .count();
        assert_eq!(dividers, 2);
    }

    #[test]
    fn toggle_pin_roundtrip() {
        let temp = tempfile::tempdir().unwrap();
        let mut app = test_app(temp.path());
        app.pinned.clear();
        app.refresh_sidebar();

        // Force a known selectable entry regardless of the host machine.
        let pinned_divider = app
            .sidebar
            .directories
            .iter()
            .position(SidebarEntry::is_divider)
            .unwrap();
        app.sidebar.directories.insert(
            pinned_divider,
            SidebarEntry::Location(Directory::new("proj", temp.path().join("proj"))),
        );
        app.sidebar.cursor = pinned_divider;

        app.toggle_pin().unwrap();
        assert_eq!(app.pinned.len(), 1);
        assert_eq!(
            catalog::pinned::load(temp.path()).unwrap().len(),
            1,
            "pin must be persisted"
        );

        // Select the pinned copy and unpin it.
        let pinned_idx = app
            .sidebar
            .directories
            .iter()
            .position(|e| e.directory().is_some_and(|d| d.name == "proj"))
            .unwrap();
        app.sidebar.cursor = pinned_idx;
        app.toggle_pin().unwrap();
        assert!(app.pinned.is_empty());
        assert!(catalog::pinned::load(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn open_selected_ignores_invalid_cursor() {
        let temp = tempfile::tempdir().unwrap();
        let mut app = test_app(temp.path());
        let divider = app
            .sidebar
            .directories
            .iter()
            .position(SidebarEntry::is_divider)
            .unwrap();
        app.sidebar.cursor = divider;
        app.open_selected();
        assert!(app.current.is_none());
    }
}
