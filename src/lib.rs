pub mod app;
pub mod catalog;
pub mod input;
pub mod runner;
pub mod ui;

pub use crate::app::{form_directory_slice, App, Directory, SidebarModel};
pub use crate::app::{Divider, SidebarEntry};
