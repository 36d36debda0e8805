pub mod header;
pub mod menu;
pub mod playfield;
pub mod screens;

use ratatui::prelude::*;

use crate::app::{App, Scene};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),   // Content
        ])
        .split(frame.area());

    header::render_header(frame, app, chunks[0]);

    match app.scene {
        Scene::Menu => menu::render_menu(frame, chunks[1], app),
        Scene::Playing => playfield::render_playing(frame, chunks[1], &app.session, app.high_scores.best()),
        Scene::Lose => {
            playfield::render_playing(frame, chunks[1], &app.session, app.high_scores.best());
            screens::render_name_entry(frame, chunks[1], "", app.session.score);
        }
        Scene::NameEntry => {
            playfield::render_playing(frame, chunks[1], &app.session, app.high_scores.best());
            screens::render_name_entry(frame, chunks[1], &app.name_buffer, app.session.score);
        }
        Scene::HighScore => screens::render_highscores(frame, chunks[1], &app.high_scores),
        Scene::Help => screens::render_help(frame, chunks[1]),
    }
}
