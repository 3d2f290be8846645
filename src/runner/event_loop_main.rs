use crate::app::settings::runtime_keybinds;
use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

use std::path::PathBuf;
use std::time::Duration;

pub fn run_app(config_dir: PathBuf, start_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let mut app = App::new(config_dir);
    app.current = start_dir;
    runtime_keybinds::install(app.settings.hotkeys.clone());

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(terminal)?;
    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // The sidebar panel height feeds every navigation call so the
        // scroll position matches what was just drawn.
        let panel_height = ui::sidebar_panel_height(terminal.size()?.height);

        if poll(Duration::from_millis(100))? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key, panel_height)? {
                        break;
                    }
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        }
    }
    Ok(())
}
