use super::SidebarModel;
use crate::app::types::SIDEBAR_INITIAL_HEIGHT;

impl SidebarModel {
    /// Index of the last row that fits when rendering starts at
    /// `start_index` in a panel of `panel_height` rows.
    ///
    /// Row heights are accumulated on top of the fixed chrome height; a row
    /// is included only while the running total stays within the panel. A
    /// `start_index` past the end of the sequence clamps to the last valid
    /// index: there is nothing more to show beyond the end.
    pub fn last_rendered_index(&self, panel_height: usize, start_index: usize) -> usize {
        let mut used_height = SIDEBAR_INITIAL_HEIGHT;
        let mut last = self.directories.len().saturating_sub(1);
        for i in start_index..self.directories.len() {
            used_height += self.directories[i].required_height();
            if used_height > panel_height {
                // Row i no longer fits; the window ends just before it. When
                // not even the first candidate row fits, usize clamps the
                // "one before the start" result at 0 and the window is empty.
                last = i.saturating_sub(1);
                break;
            }
        }
        last
    }

    /// Index the window must start at so that `end_index` is the last
    /// visible row in a panel of `panel_height` rows.
    ///
    /// Returns the sentinel `end_index + 1` when no valid window can be
    /// anchored at `end_index`: the index is past the sequence end, or the
    /// panel is too small to fit even that single row (which covers every
    /// panel height at or below the chrome height). Callers must treat any
    /// result greater than `end_index` as "render nothing".
    pub fn first_rendered_index(&self, panel_height: usize, end_index: usize) -> usize {
        if end_index >= self.directories.len() {
            return end_index + 1;
        }
        let mut used_height = SIDEBAR_INITIAL_HEIGHT;
        let mut first = end_index + 1;
        for i in (0..=end_index).rev() {
            used_height += self.directories[i].required_height();
            if used_height > panel_height {
                break;
            }
            first = i;
        }
        first
    }
}
