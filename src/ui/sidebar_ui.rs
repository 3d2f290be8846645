use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::sidebar::SidebarModel;
use crate::app::types::{SidebarEntry, SIDEBAR_INITIAL_HEIGHT};
use crate::ui::colors;

/// Draw the sidebar: rows `render_index ..= last_rendered_index` with the
/// cursor row highlighted and dividers rendered as 3-row section breaks.
///
/// The bordered block plus the leading blank line account for the fixed
/// chrome height the viewport math subtracts from the panel height.
pub fn draw_sidebar(f: &mut Frame, area: Rect, sidebar: &SidebarModel) {
    let theme = colors::current();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" filedock ", theme.sidebar_title_style));
    let inner_width = area.width.saturating_sub(2) as usize;

    let panel_height = area.height as usize;
    let mut lines: Vec<Line> = Vec::new();
    if panel_height > SIDEBAR_INITIAL_HEIGHT && !sidebar.directories.is_empty() {
        lines.push(Line::default());
        let last = sidebar.last_rendered_index(panel_height, sidebar.render_index);
        for i in sidebar.render_index..=last.min(sidebar.directories.len() - 1) {
            match &sidebar.directories[i] {
                SidebarEntry::Location(dir) => {
                    let style = if i == sidebar.cursor {
                        theme.cursor_style
                    } else {
                        theme.directory_style
                    };
                    lines.push(Line::styled(truncate(&dir.name, inner_width), style));
                }
                SidebarEntry::Divider(divider) => {
                    lines.push(Line::default());
                    lines.push(Line::styled(
                        divider.title().to_string(),
                        theme.divider_style,
                    ));
                    lines.push(Line::styled(
                        "─".repeat(inner_width),
                        theme.divider_style,
                    ));
                }
            }
        }
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn truncate(name: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    for (count, c) in name.chars().enumerate() {
        if count + 1 >= width && name.chars().count() > width {
            out.push('…');
            return out;
        }
        out.push(c);
    }
    out
}
