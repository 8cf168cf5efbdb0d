use unicode_width::UnicodeWidthStr;

use crate::event::{Key, Modifiers};

/// Outcome of feeding a key to a [`TextField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Text content changed
    Changed,
    /// Cursor moved, text unchanged
    Handled,
    /// Key is not a text editing key
    Ignored,
}

/// Single-line text with a cursor. The cursor is a byte offset that always
/// sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, placing the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the char before the cursor. Returns false at the start.
    pub fn delete_back(&mut self) -> bool {
        let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() else {
            return false;
        };
        self.text.remove(idx);
        self.cursor = idx;
        true
    }

    /// Delete the char at the cursor. Returns false at the end.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEdit {
        match key {
            Key::Char(c)
                if !c.is_control() && !modifiers.ctrl && !modifiers.alt && !modifiers.meta =>
            {
                self.insert_char(c);
                TextEdit::Changed
            }
            Key::Backspace => {
                if self.delete_back() {
                    TextEdit::Changed
                } else {
                    TextEdit::Handled
                }
            }
            Key::Delete => {
                if self.delete_forward() {
                    TextEdit::Changed
                } else {
                    TextEdit::Handled
                }
            }
            Key::Left => {
                self.move_left();
                TextEdit::Handled
            }
            Key::Right => {
                self.move_right();
                TextEdit::Handled
            }
            Key::Home => {
                self.cursor = 0;
                TextEdit::Handled
            }
            Key::End => {
                self.cursor = self.text.len();
                TextEdit::Handled
            }
            _ => TextEdit::Ignored,
        }
    }

    /// Display width in columns needed to show the text, or the placeholder
    /// when the text is shorter. One extra column leaves room for the caret.
    pub fn display_width(&self, placeholder: Option<&str>) -> usize {
        let text = self.text.width();
        let placeholder = placeholder.map(|p| p.width()).unwrap_or(0);
        text.max(placeholder) + 1
    }
}
