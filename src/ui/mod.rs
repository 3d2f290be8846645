use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

pub mod colors;
pub mod sidebar_ui;

pub use sidebar_ui::draw_sidebar;

/// Width of the sidebar column, borders included.
pub const SIDEBAR_WIDTH: u16 = 28;

/// Rows at the bottom reserved for the help bar.
const HELP_BAR_HEIGHT: u16 = 1;

/// Sidebar panel height for a terminal of `frame_height` rows. The event
/// loop and the renderer both use this, so navigation math always agrees
/// with what is on screen.
pub fn sidebar_panel_height(frame_height: u16) -> usize {
    frame_height.saturating_sub(HELP_BAR_HEIGHT) as usize
}

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(HELP_BAR_HEIGHT)].as_ref())
        .split(f.area());

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)].as_ref())
        .split(chunks[0]);

    sidebar_ui::draw_sidebar(f, main_chunks[0], &app.sidebar);
    draw_main_pane(f, main_chunks[1], app);

    let theme = colors::current();
    let help = Paragraph::new(
        "↑/↓ or k/j:navigate  Enter:open  Ctrl+P:pin/unpin  Home:first  r:refresh  q:quit",
    )
    .style(theme.help_style);
    f.render_widget(help, chunks[1]);
}

fn draw_main_pane(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    use ratatui::widgets::{Block, Borders};

    let theme = colors::current();
    let shown = app
        .current
        .as_ref()
        .map(|p| p.display().to_string())
        .or_else(|| {
            app.sidebar
                .selected_directory()
                .map(|d| d.location.display().to_string())
        })
        .unwrap_or_else(|| "no directory selected".to_string());
    let pane = Paragraph::new(shown).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Directory")
            .style(theme.pane_style),
    );
    f.render_widget(pane, area);
}
