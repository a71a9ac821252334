//! army_tui - Interactive TUI for watching a battle unfold

mod app;
mod ui;

use app::App;
use battle_sim::{load_battle_config, BattleConfig};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    // Optional battle config path as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => load_battle_config(Path::new(&path))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
        None => BattleConfig::default(),
    };
    let mut app = App::new(config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Char(' '), _) | (KeyCode::Char('n'), _) => app.next_round(),
                    (KeyCode::Char('a'), _) => app.toggle_auto_run(),
                    (KeyCode::Char('r'), _) => app.new_battle(),
                    (KeyCode::Char('?'), _) => app.set_tab(2),
                    _ => {}
                }
            }
        }

        // Advance auto-run
        app.tick();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
