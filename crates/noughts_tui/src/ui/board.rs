//! The 3x3 grid.

use super::{effects, side_style};
use crate::app::App;
use noughts::{Cell, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Grid width including two separator columns.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Grid height including two separator rows.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

fn cell_rect(board: Rect, pos: Position) -> Rect {
    Rect::new(
        board.x + pos.col() as u16 * (CELL_WIDTH + 1),
        board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

/// Maps a terminal coordinate inside `board` to a cell index. Separators
/// and anything outside the grid map to `None`.
pub fn cell_at_in_board(board: Rect, column: u16, row: u16) -> Option<usize> {
    if column < board.x || row < board.y {
        return None;
    }
    let (dx, dy) = (column - board.x, row - board.y);
    if dx >= BOARD_WIDTH || dy >= BOARD_HEIGHT {
        return None;
    }
    if dx % (CELL_WIDTH + 1) == CELL_WIDTH || dy % (CELL_HEIGHT + 1) == CELL_HEIGHT {
        return None;
    }
    Position::from_row_col(
        usize::from(dy / (CELL_HEIGHT + 1)),
        usize::from(dx / (CELL_WIDTH + 1)),
    )
    .map(Position::to_index)
}

/// Renders the grid, the marks, the cursor and the win line.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let game = app.session().game();
    let status = game.status();
    let winning = status.line();

    for pos in Position::ALL {
        let index = pos.to_index();
        let (symbol, mut style) = match game.board().get(index) {
            Some(Cell::Occupied(side)) => (side.to_string(), side_style(side)),
            _ => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        };
        if winning.is_some_and(|line| line.contains(index)) {
            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
        }
        if pos == app.cursor() && !status.is_terminal() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let text = vec![
            Line::styled(" ".repeat(CELL_WIDTH as usize), style),
            Line::styled(format!("{:^width$}", symbol, width = CELL_WIDTH as usize), style),
            Line::styled(" ".repeat(CELL_WIDTH as usize), style),
        ];
        f.render_widget(Paragraph::new(text), cell_rect(area, pos));
    }

    draw_separators(f, area);

    if let Some(line) = winning {
        effects::render_win_line(f, area, line);
    }
}

fn draw_separators(f: &mut Frame, area: Rect) {
    let sep_style = Style::default().fg(Color::DarkGray);
    let horizontal = ["─"; 3].map(|s| s.repeat(CELL_WIDTH as usize)).join("┼");
    let vertical = vec![Line::raw("│"); CELL_HEIGHT as usize];

    for i in 1..3 {
        let y = area.y + i * (CELL_HEIGHT + 1) - 1;
        let x = area.x + i * (CELL_WIDTH + 1) - 1;
        let h = Rect::new(area.x, y, BOARD_WIDTH, 1).intersection(area);
        f.render_widget(Paragraph::new(horizontal.as_str()).style(sep_style), h);
        for r in 0..3 {
            let v = Rect::new(x, area.y + r * (CELL_HEIGHT + 1), 1, CELL_HEIGHT).intersection(area);
            f.render_widget(
                Paragraph::new(vertical.clone())
                    .style(sep_style)
                    .alignment(Alignment::Left),
                v,
            );
        }
    }
}
