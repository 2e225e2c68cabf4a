mod app;
mod ui;

use std::fs::File;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::debug;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use simplelog::{Config, LevelFilter, WriteLogger};

use app::App;
use jihadharini_lib::domain::seed_store;

fn main() -> Result<()> {
    // The terminal owns stdout, so logs go to a file.
    let log_file = File::create("jihadharini-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let store = seed_store();
    debug!("seeded store with {} entities", store.len());
    let mut app = App::new(&store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    debug!("shut down cleanly");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}
