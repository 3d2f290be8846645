use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyEvent;

/// Handle one key press against the sidebar. Returns `Ok(true)` when the
/// application should exit.
///
/// `panel_height` is the sidebar panel height for the current terminal size;
/// every navigation call receives it so the scroll position is reconciled
/// against what is actually on screen.
pub fn handle_key(app: &mut App, key: KeyEvent, panel_height: usize) -> anyhow::Result<bool> {
    if keybinds::is_quit(&key) {
        return Ok(true);
    }
    if keybinds::is_list_up(&key) {
        app.sidebar.list_up(panel_height);
    } else if keybinds::is_list_down(&key) {
        app.sidebar.list_down(panel_height);
    } else if keybinds::is_reset_cursor(&key) {
        app.sidebar.reset_cursor();
        app.sidebar.update_render_index(panel_height);
    } else if keybinds::is_confirm(&key) {
        app.open_selected();
    } else if keybinds::is_pinned_directory(&key) {
        app.toggle_pin()?;
        app.sidebar.update_render_index(panel_height);
    } else if keybinds::is_refresh(&key) {
        app.refresh_sidebar();
        app.sidebar.update_render_index(panel_height);
    }
    Ok(false)
}
