//! Editable text with a character cursor.

use zeroize::Zeroize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at its end.
    pub(crate) fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        let insert_at = byte_index_for_char(&self.text, self.cursor);
        self.text.insert(insert_at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. No-op at position 0.
    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = byte_index_for_char(&self.text, self.cursor);
        let start = byte_index_for_char(&self.text, self.cursor - 1);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }
}

impl Drop for TextBuffer {
    fn drop(&mut self) {
        self.text.zeroize();
    }
}

fn byte_index_for_char(text: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    text.char_indices().nth(char_index).map_or(text.len(), |(byte_index, _)| byte_index)
}

#[cfg(test)]
#[path = "../../test/tui/state/text_buffer.rs"]
mod tests;
