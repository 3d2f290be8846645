//! Process-wide registry for the active hotkey table. Installed once at
//! startup from the loaded settings so key handlers can consult bindings
//! without threading the settings value through every call.

use once_cell::sync::Lazy;
use std::sync::RwLock;

use super::hotkeys::Hotkeys;
use crate::input::KeyEvent;

static BINDINGS: Lazy<RwLock<Hotkeys>> = Lazy::new(|| RwLock::new(Hotkeys::default()));

/// Replace the active bindings (normally once, right after settings load).
pub fn install(hotkeys: Hotkeys) {
    if let Ok(mut guard) = BINDINGS.write() {
        *guard = hotkeys;
    }
}

/// True when `key` is bound to `action` in the active table. A poisoned
/// lock falls back to "not bound" rather than panicking mid-keystroke.
pub fn is_bound(action: &str, key: &KeyEvent) -> bool {
    BINDINGS
        .read()
        .map(|guard| guard.is_bound(action, key))
        .unwrap_or(false)
}
