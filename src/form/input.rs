//! Single-line, length-capped text field.
//!
//! The field owns the cap: every edit that would push the text past
//! `max_chars` is truncated or ignored here, so the form above it never sees
//! an over-long value.

/// Editable text with a cursor and a maximum length in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    buffer: String,

    /// Cursor position within `buffer` (byte offset on a char boundary)
    cursor: usize,

    max_chars: usize,
}

impl InputState {
    /// Create an empty field that accepts at most `max_chars` characters
    #[must_use]
    pub const fn new(max_chars: usize) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            max_chars,
        }
    }

    /// Current text, untrimmed
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position as a byte offset into [`Self::text`]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Maximum number of characters the field accepts
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Number of characters currently in the field
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Characters that can still be inserted
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_chars.saturating_sub(self.char_count())
    }

    /// Whether the field has reached its cap
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Get the trimmed content of the buffer
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.buffer.trim()
    }

    /// Check if the buffer is blank (empty after trimming)
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Replace the whole text, keeping at most `max_chars` characters, and
    /// move the cursor to the end.
    ///
    /// Returns `true` if the text changed.
    pub fn set(&mut self, content: &str) -> bool {
        let capped: String = single_line(content).take(self.max_chars).collect();
        let changed = capped != self.buffer;
        self.buffer = capped;
        self.cursor = self.buffer.len();
        changed
    }

    /// Clear the text and reset the cursor
    pub fn clear(&mut self) -> bool {
        let changed = !self.buffer.is_empty();
        self.buffer.clear();
        self.cursor = 0;
        changed
    }

    /// Insert a character at the cursor; ignored when the field is full or
    /// the character is a control character.
    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() || self.is_full() {
            return false;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Insert as much of `text` as fits at the cursor.
    ///
    /// Returns `true` if anything was inserted.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let fitted: String = single_line(text).take(self.remaining()).collect();
        if fitted.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor, &fitted);
        self.cursor += fitted.len();
        true
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev_char_boundary = self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.buffer.remove(prev_char_boundary);
        self.cursor = prev_char_boundary;
        true
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        self.buffer.remove(self.cursor);
        true
    }

    /// Delete the previous word (like many shell/readline editors).
    ///
    /// Removes any whitespace immediately before the cursor, then the
    /// contiguous non-whitespace run before that.
    pub fn delete_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let before = &self.buffer[..self.cursor];
        let word_end = before.trim_end().len();
        let start = before[..word_end]
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map_or(0, |(i, ch)| i + ch.len_utf8());

        self.buffer.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Move cursor left by one character
    pub fn cursor_left(&mut self) {
        self.cursor = self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
    }

    /// Move cursor right by one character
    pub fn cursor_right(&mut self) {
        if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Move cursor to the start of the text
    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end of the text
    pub const fn cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }
}

/// Characters of `text` that a single-line field keeps
fn single_line(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| !c.is_control())
}
