use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::MAX_NAME_LEN;
use crate::scores::{HighScores, LEADERBOARD_LEN};

const INSTRUCTIONS: [&str; 6] = [
    "← → / A D : Move left/right",
    "SPACE : Fire upward",
    "Avoid enemy balls",
    "Destroy shields to hit the enemy",
    "Collect power-ups for effects",
    "Survive as long as possible!",
];

fn any_key_prompt() -> Line<'static> {
    Line::from(Span::styled(
        "Press any key to return to menu",
        Style::default().fg(Color::Rgb(180, 180, 200)),
    ))
}

fn screen_block(title: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

pub fn render_highscores(frame: &mut Frame, area: Rect, scores: &HighScores) {
    let block = screen_block(" 🏆 Highscores ", Color::Rgb(80, 255, 80));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    let top = scores.top_scores(LEADERBOARD_LEN);
    if top.is_empty() {
        lines.push(Line::from(Span::styled("No scores yet", Style::default().fg(Color::DarkGray))));
    }
    for (i, entry) in top.iter().enumerate() {
        let color = match i {
            0 => Color::Rgb(255, 215, 0),
            1 => Color::Rgb(192, 192, 192),
            2 => Color::Rgb(205, 127, 50),
            _ => Color::White,
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled(format!("{:<width$}", entry.name, width = MAX_NAME_LEN), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" - {:>6}", entry.score), Style::default().fg(color)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(any_key_prompt());

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let block = screen_block(" How to Play ", Color::Rgb(0, 255, 255));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    lines.extend(
        INSTRUCTIONS
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::White)))),
    );
    lines.push(Line::from(""));
    lines.push(any_key_prompt());

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Centred overlay shown over the frozen playfield after the player dies.
pub fn render_name_entry(frame: &mut Frame, area: Rect, name_buffer: &str, score: u32) {
    let overlay_w = 44u16.min(area.width.saturating_sub(4));
    let overlay_h = 11u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 60, 60)))
        .title(" GAME OVER ")
        .title_style(Style::default().fg(Color::Rgb(255, 60, 60)).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "You Lose! Enter your name:",
            Style::default().fg(Color::Rgb(255, 0, 0)).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", score),
            Style::default().fg(Color::Rgb(255, 215, 0)).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(name_buffer.to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled("|", Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" save  ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled("Backspace", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" delete", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
    ];

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}
