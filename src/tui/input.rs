//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the mark cursor left or right, clamped to `len` boxes.
pub fn move_cursor(cursor: usize, key: KeyCode, len: usize) -> usize {
    match key {
        KeyCode::Left | KeyCode::Char('h') => cursor.saturating_sub(1),
        KeyCode::Right | KeyCode::Char('l') if cursor + 1 < len => cursor + 1,
        KeyCode::Home => 0,
        KeyCode::End => len.saturating_sub(1),
        _ => cursor,
    }
}

/// Maps `1`-`9` to a zero-based box position.
pub fn digit_position(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|digit| (1..=9).contains(digit))
            .map(|digit| digit as usize - 1),
        _ => None,
    }
}
