use super::SidebarModel;

impl SidebarModel {
    /// Move the cursor one selectable row up, skipping dividers and wrapping
    /// from the top to the last location. No-op when nothing is selectable.
    ///
    /// The skip is a bounded loop: this layout never holds more than two
    /// consecutive dividers, so the walk terminates quickly and never
    /// recurses.
    pub fn list_up(&mut self, panel_height: usize) {
        if self.no_actual_dir() {
            return;
        }
        let mut candidate = self.cursor;
        loop {
            if candidate == 0 {
                candidate = self.last_actual_index();
                break;
            }
            candidate -= 1;
            if !self.directories[candidate].is_divider() {
                break;
            }
        }
        self.cursor = candidate;
        self.update_render_index(panel_height);
    }

    /// Move the cursor one selectable row down, skipping dividers and
    /// wrapping from the bottom to the first location. No-op when nothing is
    /// selectable.
    pub fn list_down(&mut self, panel_height: usize) {
        if self.no_actual_dir() {
            return;
        }
        let mut candidate = self.cursor;
        loop {
            candidate += 1;
            if candidate >= self.directories.len() {
                candidate = self.first_actual_index();
                break;
            }
            if !self.directories[candidate].is_divider() {
                break;
            }
        }
        self.cursor = candidate;
        self.update_render_index(panel_height);
    }
}
