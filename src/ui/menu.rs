use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, MenuItem};

const BANNER: &str = r#"
 ██████╗ ██╗   ██╗██╗     ██╗     ███████╗████████╗    ██╗  ██╗███████╗██╗     ██╗
 ██╔══██╗██║   ██║██║     ██║     ██╔════╝╚══██╔══╝    ██║  ██║██╔════╝██║     ██║
 ██████╔╝██║   ██║██║     ██║     █████╗     ██║       ███████║█████╗  ██║     ██║
 ██╔══██╗██║   ██║██║     ██║     ██╔══╝     ██║       ██╔══██║██╔══╝  ██║     ██║
 ██████╔╝╚██████╔╝███████╗███████╗███████╗   ██║       ██║  ██║███████╗███████╗███████╗
 ╚═════╝  ╚═════╝ ╚══════╝╚══════╝╚══════╝   ╚═╝       ╚═╝  ╚═╝╚══════╝╚══════╝╚══════╝"#;

const BUTTON_WIDTH: u16 = 24;
const BUTTON_HEIGHT: u16 = 3;

/// Draws the title and the four buttons, recording where each button landed
/// so mouse clicks can be matched against them.
pub fn render_menu(frame: &mut Frame, area: Rect, app: &mut App) {
    let banner_lines: Vec<Line> = BANNER
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Rgb(255, 90, 60)))))
        .collect();
    let banner_h = banner_lines.len() as u16;
    let wide_enough = area.width as usize >= BANNER.lines().map(|l| l.chars().count()).max().unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if wide_enough { banner_h } else { 2 }),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    if wide_enough {
        frame.render_widget(Paragraph::new(banner_lines).alignment(Alignment::Center), chunks[0]);
    } else {
        let title = Paragraph::new(Line::from(Span::styled(
            "BULLET HELL",
            Style::default().fg(Color::Rgb(255, 90, 60)).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);
    }

    let best = app.high_scores.best();
    if best > 0 {
        let hs = Paragraph::new(Line::from(Span::styled(
            format!("Best Score: {}", best),
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hs, chunks[1]);
    }

    app.menu_buttons.clear();
    let list = chunks[2];
    let x = list.x + list.width.saturating_sub(BUTTON_WIDTH) / 2;
    for (i, item) in MenuItem::all().iter().enumerate() {
        let y = list.y + 1 + i as u16 * (BUTTON_HEIGHT + 1);
        if y + BUTTON_HEIGHT > list.y + list.height {
            break;
        }
        let button = Rect::new(x, y, BUTTON_WIDTH.min(list.width), BUTTON_HEIGHT);
        render_button(frame, button, i, *item, i == app.selected);
        app.menu_buttons.push((button, *item));
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled(" ↑↓ ", Style::default().fg(Color::Rgb(80, 200, 255))),
        Span::styled("Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter/Click ", Style::default().fg(Color::Rgb(80, 200, 255))),
        Span::styled("Choose  ", Style::default().fg(Color::DarkGray)),
        Span::styled("1-4 ", Style::default().fg(Color::Rgb(80, 200, 255))),
        Span::styled("Shortcut  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Q ", Style::default().fg(Color::Rgb(80, 200, 255))),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn render_button(frame: &mut Frame, area: Rect, idx: usize, item: MenuItem, selected: bool) {
    let border_color = if selected { Color::Rgb(255, 220, 80) } else { Color::Rgb(200, 200, 200) };
    let border_type = if selected { BorderType::Double } else { BorderType::Plain };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Rgb(50, 50, 50)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Rgb(220, 220, 220))
    };
    let label = Paragraph::new(Line::from(vec![
        Span::styled(format!("[{}] ", idx + 1), Style::default().fg(Color::Rgb(255, 220, 80))),
        Span::styled(item.label(), label_style),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(label, inner);
}
