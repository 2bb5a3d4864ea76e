use super::NoteStore;
use crate::error::{NotesError, Result};
use crate::model::{Note, NoteId};

/// Session-only note storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: Vec<Note>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &NoteId) -> Result<usize> {
        self.notes
            .iter()
            .position(|note| &note.id == id)
            .ok_or_else(|| NotesError::NoteNotFound(id.clone()))
    }

    fn ensure_unique(&self, id: &NoteId) -> Result<()> {
        if self.contains(id) {
            return Err(NotesError::DuplicateId(id.clone()));
        }
        Ok(())
    }
}

impl NoteStore for MemoryStore {
    fn notes(&self) -> &[Note] {
        &self.notes
    }

    fn get(&self, id: &NoteId) -> Result<&Note> {
        let index = self.position(id)?;
        Ok(&self.notes[index])
    }

    fn insert_front(&mut self, note: Note) -> Result<()> {
        self.ensure_unique(&note.id)?;
        self.notes.insert(0, note);
        Ok(())
    }

    fn append(&mut self, note: Note) -> Result<()> {
        self.ensure_unique(&note.id)?;
        self.notes.push(note);
        Ok(())
    }

    fn remove(&mut self, id: &NoteId) -> Result<Note> {
        let index = self.position(id)?;
        Ok(self.notes.remove(index))
    }

    fn toggle_archived(&mut self, id: &NoteId) -> Result<bool> {
        let index = self.position(id)?;
        let note = &mut self.notes[index];
        note.archived = !note.archived;
        Ok(note.archived)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    pub struct StoreFixture {
        pub store: MemoryStore,
        next: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
                next: 1,
            }
        }

        fn next_note(&mut self, title: &str, body: &str) -> Note {
            let base = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
            let at = base + Duration::minutes(self.next);
            let note = Note::new(NoteId::new(format!("note-{}", self.next)), title, body, at);
            self.next += 1;
            note
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = self.next_note(
                    &format!("Catatan {}", i + 1),
                    &format!("Isi catatan nomor {}", i + 1),
                );
                self.store.append(note).unwrap();
            }
            self
        }

        pub fn with_active_note(mut self, title: &str, body: &str) -> Self {
            let note = self.next_note(title, body);
            self.store.append(note).unwrap();
            self
        }

        pub fn with_archived_note(mut self, title: &str, body: &str) -> Self {
            let mut note = self.next_note(title, body);
            note.archived = true;
            self.store.append(note).unwrap();
            self
        }
    }
}
