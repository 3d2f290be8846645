use ratatui::style::{Color, Modifier, Style};

/// Style set shared by the widgets. A single built-in theme for now; kept
/// behind `current()` so a configurable theme can slot in without touching
/// the widgets.
pub struct Theme {
    pub directory_style: Style,
    pub cursor_style: Style,
    pub divider_style: Style,
    pub sidebar_title_style: Style,
    pub pane_style: Style,
    pub help_style: Style,
}

pub fn current() -> Theme {
    Theme {
        directory_style: Style::default().fg(Color::Gray),
        cursor_style: Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        divider_style: Style::default().fg(Color::DarkGray),
        sidebar_title_style: Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        pane_style: Style::default().fg(Color::Gray),
        help_style: Style::default().fg(Color::DarkGray),
    }
}
