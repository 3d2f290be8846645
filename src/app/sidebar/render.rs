use super::SidebarModel;

impl SidebarModel {
    /// Reconcile the scroll position with the cursor after a move.
    ///
    /// Case I: the cursor moved above the window, so the window starts at the
    /// cursor. Checked first so a cursor sitting exactly on `render_index`
    /// leaves the window alone. Case II: the cursor is still inside the
    /// window, nothing to do. Case III: the cursor fell below the window, so
    /// scroll just far enough that the cursor becomes the last visible row.
    pub fn update_render_index(&mut self, panel_height: usize) {
        if self.no_actual_dir() {
            return;
        }
        if self.cursor < self.render_index {
            self.render_index = self.cursor;
            return;
        }
        if self.cursor <= self.last_rendered_index(panel_height, self.render_index) {
            return;
        }
        self.render_index = self.first_rendered_index(panel_height, self.cursor);
    }
}
