use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Scene};

const ACTIVE: Color = Color::Rgb(255, 220, 80);
const IDLE: Color = Color::Rgb(120, 120, 140);

/// Scene tabs on the left, a live status badge in the top-right corner.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.scene.tab_index();
    let mut spans = Vec::new();
    for (i, scene) in Scene::tabs().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::Rgb(60, 60, 80))));
        }
        let style = if scene.tab_index() == current {
            Style::default().fg(ACTIVE).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(IDLE)
        };
        spans.push(Span::styled(scene.title(), style));
    }

    let border = match app.scene {
        Scene::Lose | Scene::NameEntry => Color::Rgb(230, 40, 40),
        Scene::Playing if app.session.player.is_invincible() => ACTIVE,
        _ => Color::Rgb(200, 60, 60),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title_top(Line::from(Span::styled(
            " ✹ Bullet Hell ",
            Style::default().fg(Color::Rgb(255, 120, 60)).add_modifier(Modifier::BOLD),
        )))
        .title_top(Line::from(status_badge(app)).right_aligned());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Short summary of the game state for the header corner.
pub fn status_badge(app: &App) -> Span<'static> {
    match app.scene {
        Scene::Playing => {
            let player = &app.session.player;
            let style = if player.is_invincible() {
                Style::default().fg(ACTIVE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(format!(" ♥ {}  ★ {} ", player.health, app.session.score), style)
        }
        Scene::Lose => Span::styled(
            " GAME OVER ",
            Style::default().fg(Color::Rgb(230, 40, 40)).add_modifier(Modifier::BOLD),
        ),
        Scene::NameEntry => Span::styled(
            format!(" ENTER NAME  ★ {} ", app.session.score),
            Style::default().fg(Color::Rgb(230, 40, 40)),
        ),
        Scene::Menu | Scene::HighScore | Scene::Help => match app.high_scores.best() {
            0 => Span::styled(" no scores yet ", Style::default().fg(IDLE)),
            best => Span::styled(format!(" best {best} "), Style::default().fg(IDLE)),
        },
    }
}
