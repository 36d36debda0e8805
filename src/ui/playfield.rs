use std::collections::HashMap;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::{Bounds, Session};

type DotMap = HashMap<(usize, usize), u8>;

const BG: Color = Color::Rgb(5, 0, 10);

// ── Braille rendering ──────────────────────────────────────────────

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// Playfield pixels mapped onto a grid of braille dots (2x4 per cell).
struct DotCanvas {
    bw: i32,
    bh: i32,
    sx: f32,
    sy: f32,
}

impl DotCanvas {
    fn new(cells_w: usize, cells_h: usize, field_w: f32, field_h: f32) -> Self {
        let bw = (cells_w * 2) as i32;
        let bh = (cells_h * 4) as i32;
        Self {
            bw,
            bh,
            sx: bw as f32 / field_w,
            sy: bh as f32 / field_h,
        }
    }

    fn set_dot(&self, map: &mut DotMap, bx: i32, by: i32) {
        if bx < 0 || by < 0 || bx >= self.bw || by >= self.bh {
            return;
        }
        let cx = bx as usize / 2;
        let cy = by as usize / 4;
        *map.entry((cx, cy)).or_insert(0) |= braille_bit(bx as usize % 2, by as usize % 4);
    }

    /// Dot range covered by `b`, always at least one dot wide and tall.
    fn dot_span(&self, b: &Bounds) -> (i32, i32, i32, i32) {
        let x0 = (b.x * self.sx).floor() as i32;
        let y0 = (b.y * self.sy).floor() as i32;
        let x1 = ((b.right() * self.sx).ceil() as i32).max(x0 + 1);
        let y1 = ((b.bottom() * self.sy).ceil() as i32).max(y0 + 1);
        (x0, y0, x1, y1)
    }

    fn fill(&self, map: &mut DotMap, b: &Bounds) {
        let (x0, y0, x1, y1) = self.dot_span(b);
        for by in y0.max(0)..y1.min(self.bh) {
            for bx in x0.max(0)..x1.min(self.bw) {
                self.set_dot(map, bx, by);
            }
        }
    }

    /// Round sprite: dots inside the ellipse inscribed in `b`.
    fn fill_round(&self, map: &mut DotMap, b: &Bounds) {
        let (x0, y0, x1, y1) = self.dot_span(b);
        let rx = (x1 - x0) as f32 / 2.0;
        let ry = (y1 - y0) as f32 / 2.0;
        let cx = x0 as f32 + rx;
        let cy = y0 as f32 + ry;
        for by in y0..y1 {
            for bx in x0..x1 {
                let nx = (bx as f32 + 0.5 - cx) / rx;
                let ny = (by as f32 + 0.5 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.set_dot(map, bx, by);
                }
            }
        }
    }

    fn outline(&self, map: &mut DotMap, b: &Bounds) {
        let (x0, y0, x1, y1) = self.dot_span(b);
        for bx in x0..x1 {
            self.set_dot(map, bx, y0);
            self.set_dot(map, bx, y1 - 1);
        }
        for by in y0..y1 {
            self.set_dot(map, x0, by);
            self.set_dot(map, x1 - 1, by);
        }
    }
}

fn write_layer(grid: &mut [Vec<(char, Style)>], map: &DotMap, color: Color, bold: bool) {
    for (&(cx, cy), &bits) in map {
        let Some(cell) = grid.get_mut(cy).and_then(|row| row.get_mut(cx)) else {
            continue;
        };
        if bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            let mut style = Style::default().fg(color).bg(BG);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            *cell = (ch, style);
        }
    }
}

/// Rasterises the session into styled terminal lines of `width`x`height` cells.
pub fn render_field(session: &Session, width: usize, height: usize) -> Vec<Line<'static>> {
    let canvas = DotCanvas::new(width, height, session.config.width, session.config.height);
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(BG)); width]; height];

    // ── Shields ────────────────────────────────────────────────────
    let mut smap = DotMap::new();
    for shield in session.shields.iter().filter(|s| s.active) {
        canvas.outline(&mut smap, &shield.bounds);
    }
    write_layer(&mut grid, &smap, Color::Rgb(40, 140, 200), false);

    // ── Power-ups ──────────────────────────────────────────────────
    let mut pmap = DotMap::new();
    for p in &session.powerups {
        canvas.fill_round(&mut pmap, &p.bounds);
    }
    write_layer(&mut grid, &pmap, Color::Rgb(255, 80, 255), true);

    // ── Enemy balls ────────────────────────────────────────────────
    let mut bmap = DotMap::new();
    for ball in &session.balls {
        canvas.fill_round(&mut bmap, &ball.bounds);
    }
    write_layer(&mut grid, &bmap, Color::Rgb(255, 120, 40), true);

    // ── Fireballs ──────────────────────────────────────────────────
    let mut fmap = DotMap::new();
    for fire in &session.fireballs {
        canvas.fill_round(&mut fmap, &fire.bounds);
    }
    write_layer(&mut grid, &fmap, Color::Rgb(255, 255, 160), true);

    // ── Enemy ──────────────────────────────────────────────────────
    let mut emap = DotMap::new();
    canvas.fill(&mut emap, &session.enemy.bounds);
    write_layer(&mut grid, &emap, Color::Rgb(220, 40, 60), true);

    // ── Player ─────────────────────────────────────────────────────
    let mut map = DotMap::new();
    canvas.fill(&mut map, &session.player.bounds);
    let blink = (session.now_ms / 150) % 2 == 0;
    let color = if session.player.is_invincible() && blink {
        Color::Rgb(255, 230, 0)
    } else {
        Color::Rgb(80, 255, 80)
    };
    write_layer(&mut grid, &map, color, true);

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn health_bar(health: u32, max: u32) -> String {
    const SEGMENTS: u32 = 10;
    let filled = if max == 0 { 0 } else { (health * SEGMENTS + max - 1) / max };
    let filled = filled.min(SEGMENTS) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(SEGMENTS as usize - filled))
}

pub fn render_playing(frame: &mut Frame, area: Rect, session: &Session, best: u32) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(200, 60, 60)))
        .title(" Bullet Hell ")
        .title_style(Style::default().fg(Color::Rgb(255, 120, 60)).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(inner);

    // Status bar
    let player = &session.player;
    let mut status = vec![
        Span::styled(" Health ", Style::default().fg(Color::White)),
        Span::styled(health_bar(player.health, session.config.max_health), Style::default().fg(Color::Green).bg(Color::Rgb(120, 0, 0))),
        Span::styled(format!(" {:>3} ", player.health), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("Score: {} ", session.score), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("Highscore: {} ", best.max(session.score)), Style::default().fg(Color::Rgb(255, 220, 0))),
    ];
    if player.is_invincible() {
        status.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        status.push(Span::styled(
            format!("INVINCIBLE! {:.1}s", session.invincible_remaining_ms() as f32 / 1000.0),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[0]);

    let fw = chunks[1].width as usize;
    let fh = chunks[1].height as usize;
    if fw > 0 && fh > 0 {
        let lines = render_field(session, fw, fh);
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled(" ←→ / A D Move ", Style::default().fg(Color::DarkGray)),
        Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Space Fire ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled(
            if session.shields_visible { "Shields UP " } else { "Shields DOWN " },
            Style::default().fg(Color::Rgb(40, 140, 200)),
        ),
        Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Ctrl+C Quit", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, chunks[2]);
}
