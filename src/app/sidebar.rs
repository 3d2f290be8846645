use crate::app::types::{Directory, Divider, SidebarEntry};

mod navigation;
mod render;
mod viewport;

/// Sidebar state: the logical row sequence plus the cursor and scroll
/// position.
///
/// This struct intentionally stores only UI-independent state so the
/// navigation and viewport behaviour can be unit-tested without rendering.
/// Fields are public in the same spirit as the file panels: the renderer
/// reads them directly and tests construct states inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarModel {
    /// Full ordered sequence of divider/location rows.
    pub directories: Vec<SidebarEntry>,
    /// Index of the top-most row currently scrolled into view.
    pub render_index: usize,
    /// Index of the selected row. Valid states never point at a divider.
    pub cursor: usize,
}

/// Build the sidebar's logical sequence from the three directory categories.
///
/// Layout is fixed: home rows, the pinned divider, pinned rows, the disk
/// divider, disk rows. Both dividers are present even when their category is
/// empty, so row indices stay computable from the category sizes alone.
/// Callers rebuild from scratch whenever any category changes; the sequence
/// is never patched incrementally.
pub fn form_directory_slice(
    home: Vec<Directory>,
    pinned: Vec<Directory>,
    disk: Vec<Directory>,
) -> Vec<SidebarEntry> {
    let mut rows = Vec::with_capacity(home.len() + pinned.len() + disk.len() + 2);
    rows.extend(home.into_iter().map(SidebarEntry::Location));
    rows.push(SidebarEntry::Divider(Divider::Pinned));
    rows.extend(pinned.into_iter().map(SidebarEntry::Location));
    rows.push(SidebarEntry::Divider(Divider::Disk));
    rows.extend(disk.into_iter().map(SidebarEntry::Location));
    rows
}

impl SidebarModel {
    pub fn new(directories: Vec<SidebarEntry>) -> Self {
        SidebarModel {
            directories,
            render_index: 0,
            cursor: 0,
        }
    }

    /// True when the sidebar holds no selectable directory at all, which
    /// includes the uninitialized empty model and a sequence of bare
    /// dividers. Every navigation call is a no-op in that state.
    pub fn no_actual_dir(&self) -> bool {
        self.directories.iter().all(|e| e.is_divider())
    }

    /// True when the cursor cannot be acted upon: nothing selectable exists,
    /// the cursor is out of range, or it rests on a divider.
    pub fn is_cursor_invalid(&self) -> bool {
        self.no_actual_dir()
            || self.cursor >= self.directories.len()
            || self.directories[self.cursor].is_divider()
    }

    /// Move the cursor to the first selectable row in document order, or to
    /// 0 for a sidebar with nothing selectable. Leaves `render_index`
    /// untouched.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.first_actual_index();
    }

    /// Index of the first location row, or 0 when none exists.
    pub(crate) fn first_actual_index(&self) -> usize {
        self.directories
            .iter()
            .position(|e| !e.is_divider())
            .unwrap_or(0)
    }

    /// Index of the last location row, or 0 when none exists.
    pub(crate) fn last_actual_index(&self) -> usize {
        self.directories
            .iter()
            .rposition(|e| !e.is_divider())
            .unwrap_or(0)
    }

    /// The directory under the cursor, if the cursor is on one.
    pub fn selected_directory(&self) -> Option<&Directory> {
        if self.is_cursor_invalid() {
            return None;
        }
        self.directories[self.cursor].directory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_slice(count: usize) -> Vec<Directory> {
        (0..count)
            .map(|i| Directory::new(format!("Dir{i}"), format!("/a/{i}")))
            .collect()
    }

    fn full_dir_slice(count: usize) -> Vec<SidebarEntry> {
        form_directory_slice(dir_slice(count), dir_slice(count), dir_slice(count))
    }

    #[test]
    fn layout_places_dividers_at_fixed_indices() {
        let rows = form_directory_slice(dir_slice(3), dir_slice(2), dir_slice(4));
        assert_eq!(rows.len(), 3 + 2 + 4 + 2);
        for (i, row) in rows.iter().enumerate() {
            let divider = i == 3 || i == 3 + 2 + 1;
            assert_eq!(row.is_divider(), divider, "index {i}");
        }
    }

    #[test]
    fn dividers_present_for_empty_categories() {
        let rows = form_directory_slice(vec![], vec![], vec![]);
        assert_eq!(
            rows,
            vec![
                SidebarEntry::Divider(Divider::Pinned),
                SidebarEntry::Divider(Divider::Disk),
            ]
        );
    }

    #[test]
    fn no_actual_dir_cases() {
        assert!(SidebarModel::default().no_actual_dir());
        assert!(SidebarModel::new(full_dir_slice(0)).no_actual_dir());
        let pinned_only =
            SidebarModel::new(form_directory_slice(vec![], dir_slice(10), vec![]));
        assert!(!pinned_only.no_actual_dir());
        assert!(!SidebarModel::new(full_dir_slice(10)).no_actual_dir());
    }

    #[test]
    fn cursor_validity() {
        assert!(SidebarModel::default().is_cursor_invalid());

        let mut sidebar = SidebarModel::new(full_dir_slice(10));
        sidebar.cursor = 32; // past the 32-row sequence
        assert!(sidebar.is_cursor_invalid());
        sidebar.cursor = 10; // pinned divider
        assert!(sidebar.is_cursor_invalid());
        sidebar.cursor = 5;
        assert!(!sidebar.is_cursor_invalid());
    }

    #[test]
    fn reset_cursor_lands_on_first_location() {
        let mut pinned_only =
            SidebarModel::new(form_directory_slice(vec![], dir_slice(10), vec![]));
        pinned_only.reset_cursor();
        assert_eq!(pinned_only.cursor, 1);

        let mut all = SidebarModel::new(full_dir_slice(10));
        all.cursor = 17;
        all.reset_cursor();
        assert_eq!(all.cursor, 0);

        let mut disk_only =
            SidebarModel::new(form_directory_slice(vec![], vec![], dir_slice(10)));
        disk_only.reset_cursor();
        assert_eq!(disk_only.cursor, 2);

        let mut empty = SidebarModel::new(full_dir_slice(0));
        empty.cursor = 1;
        empty.reset_cursor();
        assert_eq!(empty.cursor, 0);
    }

    #[test]
    fn reset_cursor_keeps_render_index() {
        let mut sidebar = SidebarModel::new(full_dir_slice(10));
        sidebar.render_index = 7;
        sidebar.cursor = 20;
        sidebar.reset_cursor();
        assert_eq!(sidebar.render_index, 7);
    }

    #[test]
    fn selected_directory_refuses_dividers() {
        let mut sidebar = SidebarModel::new(full_dir_slice(2));
        sidebar.cursor = 2; // pinned divider
        assert!(sidebar.selected_directory().is_none());
        sidebar.cursor = 1;
        assert_eq!(sidebar.selected_directory().unwrap().name, "Dir1");
    }
}
