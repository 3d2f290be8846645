pub mod core;
pub mod settings;
pub mod sidebar;
pub mod types;

pub use self::core::App;
pub use sidebar::{form_directory_slice, SidebarModel};
pub use types::{Directory, Divider, SidebarEntry, SIDEBAR_INITIAL_HEIGHT};
