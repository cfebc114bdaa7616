use crate::persistence::{Store, SCRATCHPAD_KEY};
use anyhow::Result;

/// Free-text scratchpad, persisted in full on every edit
#[derive(Debug, Clone, Default)]
pub struct Notepad {
    text: String,
}

impl Notepad {
    /// Read the stored text once at startup. Absent or unreadable text
    /// leaves the pad empty.
    pub fn load_once(store: &dyn Store) -> Self {
        let text = match store.get(SCRATCHPAD_KEY) {
            Ok(text) => text.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable scratchpad");
                String::new()
            }
        };
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, store: &mut dyn Store, text: String) -> Result<()> {
        self.text = text;
        store.set(SCRATCHPAD_KEY, &self.text)
    }
}

/// Cursor editing over a notepad. Positions are byte offsets on char boundaries.
#[derive(Debug, Clone, Default)]
pub struct NotepadCursor {
    pub pos: usize,
}

impl NotepadCursor {
    pub fn at_end(notepad: &Notepad) -> Self {
        Self {
            pos: notepad.text().len(),
        }
    }

    pub fn insert(&mut self, notepad: &mut Notepad, store: &mut dyn Store, c: char) -> Result<()> {
        let mut text = notepad.text().to_string();
        let pos = self.pos.min(text.len());
        text.insert(pos, c);
        self.pos = pos + c.len_utf8();
        notepad.set_text(store, text)
    }

    pub fn backspace(&mut self, notepad: &mut Notepad, store: &mut dyn Store) -> Result<()> {
        let text = notepad.text();
        let Some((prev, _)) = text[..self.pos.min(text.len())].char_indices().next_back() else {
            return Ok(());
        };
        let mut text = text.to_string();
        text.remove(prev);
        self.pos = prev;
        notepad.set_text(store, text)
    }

    pub fn delete(&mut self, notepad: &mut Notepad, store: &mut dyn Store) -> Result<()> {
        if self.pos >= notepad.text().len() {
            return Ok(());
        }
        let mut text = notepad.text().to_string();
        text.remove(self.pos);
        notepad.set_text(store, text)
    }

    pub fn left(&mut self, notepad: &Notepad) {
        if let Some((prev, _)) = notepad.text()[..self.pos].char_indices().next_back() {
            self.pos = prev;
        }
    }

    pub fn right(&mut self, notepad: &Notepad) {
        if let Some(c) = notepad.text()[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.pos = 0;
    }

    pub fn end(&mut self, notepad: &Notepad) {
        self.pos = notepad.text().len();
    }
}
