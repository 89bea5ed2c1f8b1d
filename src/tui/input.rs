//! Input field handling for the terminal user interface.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::colors::FOCUS;

/// A text input field with cursor position and active state management.
///
/// `cursor` counts characters, not bytes, so multi-byte input edits cleanly.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input field with initial text value.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            active: false,
        }
    }

    pub fn focus(&mut self) {
        self.active = true;
    }

    pub fn blur(&mut self) {
        self.active = false;
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Apply a standard editing key. Unrecognised keys are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.handle_char(c),
            KeyCode::Backspace => self.handle_backspace(),
            KeyCode::Delete => self.handle_delete(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => {}
        }
    }

    /// Render the field inside a bordered block, drawing a block cursor when active.
    pub fn render(&self, f: &mut Frame, area: Rect, label: &str, placeholder: &str) {
        let border_style = if self.active {
            Style::default().fg(FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(label.to_string())
            .border_style(border_style);

        let line = if self.value.is_empty() && !self.active {
            Line::from(Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)))
        } else if self.active {
            let at = self.byte_offset(self.cursor);
            let (before, rest) = self.value.split_at(at);
            let mut chars = rest.chars();
            let under = chars.next().map_or(" ".to_string(), |c| c.to_string());
            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
                Span::raw(chars.as_str().to_string()),
            ])
        } else {
            Line::from(self.value.clone())
        };

        f.render_widget(Paragraph::new(line).block(block), area);
    }
}
