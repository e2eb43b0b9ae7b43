//! UI rendering using ratatui.

mod board;
mod effects;

use crate::app::App;
use noughts::Side;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// Scores and round.
    pub scores: Rect,
    /// The 3x3 grid, exactly sized.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits the frame into its regions.
pub fn layout(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(board::BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        title: chunks[0],
        scores: chunks[1],
        board: center_rect(chunks[2], board::BOARD_WIDTH, board::BOARD_HEIGHT),
        status: chunks[3],
        help: chunks[4],
    }
}

/// Finds the cell index under a terminal coordinate.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    board::cell_at_in_board(layout(area).board, column, row)
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let regions = layout(f.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, regions.title);

    let scores = app.session().scores();
    let score_line = Line::from(vec![
        Span::styled(format!("X: {}", scores.wins(Side::X)), side_style(Side::X)),
        Span::raw("   "),
        Span::styled(format!("O: {}", scores.wins(Side::O)), side_style(Side::O)),
        Span::raw(format!("   Round: {}   ", scores.round())),
        Span::styled(app.session().mode().to_string(), Style::default().fg(Color::Gray)),
    ]);
    let scores = Paragraph::new(score_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(scores, regions.scores);

    board::render_board(f, regions.board, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, regions.status);

    let help = Paragraph::new("1-9/arrows+Enter/click: move | R: Restart | N: New game | A: vs AI | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, regions.help);

    if let Some(confetti) = app.confetti() {
        effects::render_confetti(f, f.area(), confetti);
    }
}

/// Mark color per side.
pub(crate) fn side_style(side: Side) -> Style {
    match side {
        Side::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Side::O => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_renders_scores_and_marks() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(&Config::default(), tx, StdRng::seed_from_u64(1));
        app.click(0);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Round: 1"));
        assert!(text.contains("Player O's turn"));
        assert!(text.contains('X'));
    }

    #[test]
    fn test_board_is_centered_and_hit_testable() {
        let area = Rect::new(0, 0, 80, 30);
        let regions = layout(area);
        assert_eq!(regions.board.width, board::BOARD_WIDTH);
        assert_eq!(regions.board.height, board::BOARD_HEIGHT);

        let b = regions.board;
        assert_eq!(cell_at(area, b.x, b.y), Some(0));
        assert_eq!(cell_at(area, b.x + b.width - 1, b.y + b.height - 1), Some(8));
        assert_eq!(cell_at(area, 0, 0), None);
    }
}
