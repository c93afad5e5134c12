use std::env;
use std::path::Path;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use rodio::OutputStreamBuilder;

use crate::app::Deck;
use crate::audio::RodioEngine;
use crate::error::EngineError;
use crate::library::scan;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Loops".to_string())
    });

    let descriptors = scan(Path::new(&dir), &settings.library);
    log::info!("found {} tracks in {}", descriptors.len(), dir);

    let mut stream = OutputStreamBuilder::open_default_stream().map_err(EngineError::from)?;
    // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
    // but noisy for a TUI app.
    stream.log_on_drop(false);

    // Declared after the stream so the engines fade out before it is dropped.
    let mut deck: Deck<RodioEngine> = Deck::new(settings.deck.leader);
    for descriptor in descriptors {
        let (engine, events) = RodioEngine::new(stream.mixer(), &settings.engine);
        deck.add_track(descriptor, engine, events, settings.track.initial_volume);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut deck);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
