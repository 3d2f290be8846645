pub mod config_dirs;
pub mod hotkeys;
pub mod keybinds;
pub mod runtime_keybinds;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{project_config_dir, user_cache_dir};
pub use hotkeys::{Hotkeys, Settings, SettingsError};
pub use keybinds::*;
