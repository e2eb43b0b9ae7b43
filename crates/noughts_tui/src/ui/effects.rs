//! Canvas overlays: the win line and the confetti.

use crate::confetti::Confetti;
use crate::overlay;
use noughts::Line;
use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine},
};

/// Draws the line through the winning cells over the board.
pub fn render_win_line(f: &mut Frame, board: Rect, line: Line) {
    let (width, height) = (f64::from(board.width), f64::from(board.height));
    let seg = overlay::win_segment(line, width, height).flipped(height);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            ctx.draw(&CanvasLine::new(seg.x1, seg.y1, seg.x2, seg.y2, Color::Yellow));
        });
    f.render_widget(canvas, board);
}

/// Draws every on-screen particle as a short strip turned by its angle.
pub fn render_confetti(f: &mut Frame, area: Rect, confetti: &Confetti) {
    let (width, height) = (confetti.width(), confetti.height());
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for p in confetti.particles() {
                if p.y < 0.0 || p.y >= height {
                    continue;
                }
                let half = p.size / 10.0;
                let (dx, dy) = (p.angle.cos() * half, p.angle.sin() * half);
                ctx.draw(&CanvasLine::new(
                    p.x - dx,
                    height - (p.y - dy),
                    p.x + dx,
                    height - (p.y + dy),
                    p.color,
                ));
            }
        });
    f.render_widget(canvas, area);
}
