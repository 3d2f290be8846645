use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of panel rows consumed by the sidebar chrome (title and padding)
/// before any directory row is drawn. Viewport math subtracts this from the
/// panel height to obtain the scrollable budget.
pub const SIDEBAR_INITIAL_HEIGHT: usize = 3;

/// Rows a divider occupies: a blank line, the section title and a rule.
pub const DIVIDER_HEIGHT: usize = 3;

/// A selectable, navigable directory shown in the sidebar.
///
/// Serialized as-is in the pinned-directories file, so field names are part
/// of the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    /// Display name (usually the final path component).
    pub name: String,
    /// Full path the entry navigates to.
    pub location: PathBuf,
}

impl Directory {
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Directory {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Which category boundary a divider marks. Only the rendered title differs;
/// both kinds are identical for all index and weight arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divider {
    Pinned,
    Disk,
}

impl Divider {
    pub fn title(&self) -> &'static str {
        match self {
            Divider::Pinned => "Pinned",
            Divider::Disk => "Disks",
        }
    }
}

/// One row of the sidebar's logical sequence.
///
/// Dividers are modeled as always-present entries rather than being omitted
/// for empty categories, so every row's index is computable from the three
/// category sizes alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    Location(Directory),
    Divider(Divider),
}

impl SidebarEntry {
    pub fn is_divider(&self) -> bool {
        matches!(self, SidebarEntry::Divider(_))
    }

    /// Vertical space this row costs in the viewport budget.
    pub fn required_height(&self) -> usize {
        match self {
            SidebarEntry::Location(_) => 1,
            SidebarEntry::Divider(_) => DIVIDER_HEIGHT,
        }
    }

    /// The directory behind this row, if it is selectable.
    pub fn directory(&self) -> Option<&Directory> {
        match self {
            SidebarEntry::Location(d) => Some(d),
            SidebarEntry::Divider(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_heights() {
        let loc = SidebarEntry::Location(Directory::new("home", "/home/u"));
        let div = SidebarEntry::Divider(Divider::Pinned);
        assert_eq!(loc.required_height(), 1);
        assert_eq!(div.required_height(), 3);
        assert!(!loc.is_divider());
        assert!(div.is_divider());
    }

    #[test]
    fn directory_accessor_only_for_locations() {
        let loc = SidebarEntry::Location(Directory::new("d", "/d"));
        assert_eq!(loc.directory().unwrap().name, "d");
        assert!(SidebarEntry::Divider(Divider::Disk).directory().is_none());
    }
}
