//! # Storage Layer
//!
//! The [`NoteStore`] trait is the one shared mutable resource of a session: an ordered list of
//! note records. It is handed explicitly to the components that read or mutate it; nothing in
//! the crate keeps a global note list.
//!
//! ## Ordering
//!
//! Order is meaningful. New notes are inserted at the front, seed notes are appended at the
//! back, and every view derived from the store preserves store order.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStore`]: a `Vec`-backed store that lives as long as the session.
//!
//! ## Concurrency
//!
//! There is none. Every mutation runs synchronously inside a single user action, and the
//! facade re-renders before the action returns, so the store needs no locking.

use crate::error::Result;
use crate::model::{Note, NoteId};

pub mod memory;

/// Ordered, mutable sequence of notes.
pub trait NoteStore {
    /// Every note, in store order.
    fn notes(&self) -> &[Note];

    /// Get a note by id.
    fn get(&self, id: &NoteId) -> Result<&Note>;

    fn contains(&self, id: &NoteId) -> bool {
        self.notes().iter().any(|note| &note.id == id)
    }

    fn len(&self) -> usize {
        self.notes().len()
    }

    fn is_empty(&self) -> bool {
        self.notes().is_empty()
    }

    /// Insert a note before every other note. Fails on a duplicate id.
    fn insert_front(&mut self, note: Note) -> Result<()>;

    /// Append a note after every other note. Fails on a duplicate id.
    fn append(&mut self, note: Note) -> Result<()>;

    /// Remove a note, returning it.
    fn remove(&mut self, id: &NoteId) -> Result<Note>;

    /// Flip the archived flag, returning the new value.
    fn toggle_archived(&mut self, id: &NoteId) -> Result<bool>;
}
