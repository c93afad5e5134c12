//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the deck using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{Deck, TrackSlot};
use crate::audio::SoundEngine;
use crate::track::duration_to_time;

/// Render the controls help text, incorporating the volume step.
fn controls_text(volume_step: u8) -> String {
    [
        "[j/k] up/down".to_string(),
        "[space] play/pause".to_string(),
        "[x] stop".to_string(),
        "[m] mute".to_string(),
        format!("[+/-] volume ±{}", volume_step),
        "[a] play all".to_string(),
        "[y] sync".to_string(),
        "[L] set leader".to_string(),
        "[d] remove".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

/// One list row: status, title, owner, tempo, time, progress and volume.
fn track_line<E: SoundEngine>(slot: &TrackSlot<E>, is_leader: bool) -> String {
    let player = &slot.player;
    let state = player.state();
    let descriptor = player.descriptor();

    let time = if slot.loaded_duration.is_some() || state.duration > 0 {
        format!(
            "{}/{}",
            duration_to_time(state.position),
            duration_to_time(state.duration)
        )
    } else {
        "loading".to_string()
    };
    let progress = match player.progress_state() {
        Some(p) => format!("{:>3.0}%", p),
        None => " --".to_string(),
    };
    let volume = if player.is_muted() {
        "muted".to_string()
    } else {
        format!("vol {}", state.volume)
    };

    format!(
        "{} {}{} ({}) • {} • {} {} • {}{}",
        state.status.glyph(),
        descriptor.title(),
        if is_leader { " ★" } else { "" },
        descriptor.owner,
        descriptor.bpm_label(),
        time,
        progress,
        volume,
        if state.looping { " • loop" } else { "" },
    )
}

/// Render the whole deck into `frame`.
pub fn draw<E: SoundEngine>(frame: &mut Frame, deck: &Deck<E>, volume_step: u8) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let flags = deck.flags();
    let status = format!(
        "PLAY ALL: {} • SYNC: {} • LEADER: {} BPM",
        on_off(flags.is_playing_all),
        on_off(flags.is_syncing),
        flags.leader_bpm
    );
    let header = Paragraph::new(status).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" loopdeck ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(header, chunks[0]);

    let leader = deck.leader();
    let items: Vec<ListItem> = deck
        .slots
        .iter()
        .enumerate()
        .map(|(i, slot)| ListItem::new(track_line(slot, leader == Some(i))))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if deck.has_tracks() {
        state.select(Some(deck.selected));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);

    let footer = Paragraph::new(controls_text(volume_step))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);
}
