//! Keyboard and mouse mapping.

use crossterm::event::KeyCode;
use noughts::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play this cell index.
    Place(usize),
    /// Play the cell under the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    Cursor(KeyCode),
    /// New board, keep scores.
    Restart,
    /// New board, clear scores.
    NewGame,
    /// Switch between human and computer opponent.
    ToggleMode,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action. Digits 1-9 name cells in reading order.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Place(d as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewGame),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::ToggleMode),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell; stays put at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
