use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::Deck;
use crate::audio::SoundEngine;
use crate::config;
use crate::ui;

/// Main terminal event loop: drains engine events, draws the deck and
/// handles input. Returns `Ok(())` when the user quits.
pub fn run<E: SoundEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    deck: &mut Deck<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        deck.poll_engines();

        terminal.draw(|f| ui::draw(f, deck, settings.track.volume_step))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, deck) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press to the deck. Returns `true` when the user asked to quit.
fn handle_key_event<E: SoundEngine>(
    key: KeyEvent,
    settings: &config::Settings,
    deck: &mut Deck<E>,
) -> bool {
    let step = i32::from(settings.track.volume_step);

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('j') | KeyCode::Down => deck.next(),
        KeyCode::Char('k') | KeyCode::Up => deck.prev(),
        KeyCode::Char(' ') => {
            if let Some(p) = deck.selected_player_mut() {
                p.toggle_play_pause();
            }
        }
        KeyCode::Char('x') => {
            if let Some(p) = deck.selected_player_mut() {
                p.stop();
            }
        }
        KeyCode::Char('m') => {
            if let Some(p) = deck.selected_player_mut() {
                p.toggle_mute();
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if let Some(p) = deck.selected_player_mut() {
                let v = i32::from(p.state().volume) + step;
                p.volume_change(v);
            }
        }
        KeyCode::Char('-') => {
            if let Some(p) = deck.selected_player_mut() {
                let v = i32::from(p.state().volume) - step;
                p.volume_change(v);
            }
        }
        KeyCode::Char('a') => deck.toggle_play_all(),
        KeyCode::Char('y') => deck.toggle_sync(),
        KeyCode::Char('L') => deck.set_leader_to_selected(),
        KeyCode::Char('d') | KeyCode::Delete => deck.remove_selected(),
        _ => {}
    }
    false
}
