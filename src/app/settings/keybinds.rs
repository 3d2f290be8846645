// Centralised keybind predicates for the application.
//
// Handlers refer to key actions by name (`is_list_up`) instead of matching
// raw `KeyCode` patterns, so rebinding a key in the settings file never
// touches the handlers.

use crate::app::settings::runtime_keybinds;
use crate::input::KeyEvent;

fn is_bound(action: &str, key: &KeyEvent) -> bool {
    runtime_keybinds::is_bound(action, key)
}

pub fn is_quit(key: &KeyEvent) -> bool {
    is_bound("quit", key)
}

pub fn is_list_up(key: &KeyEvent) -> bool {
    is_bound("list_up", key)
}

pub fn is_list_down(key: &KeyEvent) -> bool {
    is_bound("list_down", key)
}

pub fn is_reset_cursor(key: &KeyEvent) -> bool {
    is_bound("reset_cursor", key)
}

pub fn is_confirm(key: &KeyEvent) -> bool {
    is_bound("confirm", key)
}

pub fn is_pinned_directory(key: &KeyEvent) -> bool {
    is_bound("pinned_directory", key)
}

pub fn is_refresh(key: &KeyEvent) -> bool {
    is_bound("refresh", key)
}
