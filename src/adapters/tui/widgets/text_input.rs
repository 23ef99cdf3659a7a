use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Editable text buffer with a character-indexed cursor. Used for the
/// single-line author field and the multiline comment body; the caller
/// decides how newlines get in (see `insert_newline`).
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Remove the character before the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some((idx, _)) = self.value.char_indices().nth(self.cursor - 1) {
            self.value.remove(idx);
            self.cursor -= 1;
        }
    }

    /// Remove the character under the cursor.
    pub fn delete_forward(&mut self) {
        let idx = self.byte_index();
        if idx < self.value.len() {
            self.value.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.value.chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Render as a single-line bordered input. Shows a placeholder when
    /// empty and positions the terminal cursor when focused.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        placeholder: &str,
        focused: bool,
    ) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border_style);

        let (text, text_style) = if self.value.is_empty() {
            (placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (self.value.as_str(), Style::default())
        };

        let paragraph = Paragraph::new(text).block(block).style(text_style);
        frame.render_widget(paragraph, area);

        if focused {
            let cursor_x = area.x + 1 + self.cursor as u16;
            let cursor_y = area.y + 1;

            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(ratatui::layout::Position {
                    x: cursor_x,
                    y: cursor_y,
                });
            }
        }
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_delete_track_the_cursor() {
        let mut input = TextInput::new();
        input.insert_char('J');
        input.insert_char('o');
        assert_eq!(input.value(), "Jo");

        input.delete_char();
        assert_eq!(input.value(), "J");

        input.delete_char();
        input.delete_char();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn edits_in_the_middle_use_char_positions() {
        let mut input = TextInput::new();
        for c in "año".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_char();
        assert_eq!(input.value(), "ao");

        input.insert_char('ñ');
        assert_eq!(input.value(), "año");
    }

    #[test]
    fn delete_forward_removes_under_cursor() {
        let mut input = TextInput::new();
        for c in "abc".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.delete_forward();
        assert_eq!(input.value(), "ac");
    }

    #[test]
    fn clear_resets_value_and_cursor() {
        let mut input = TextInput::new();
        input.insert_char('x');
        input.clear();
        assert_eq!(input.value(), "");
        input.insert_char('y');
        assert_eq!(input.value(), "y");
    }
}
