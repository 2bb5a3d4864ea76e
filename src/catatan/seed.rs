use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a JSON array of note records.
pub fn read_seed<P: AsRef<Path>>(path: P) -> Result<Vec<Note>> {
    let content = fs::read_to_string(path.as_ref())?;
    let notes: Vec<Note> = serde_json::from_str(&content)?;
    Ok(notes)
}

/// Appends seed notes in file order. Stops at the first duplicate id.
pub fn load_seed<S: NoteStore, P: AsRef<Path>>(store: &mut S, path: P) -> Result<usize> {
    let notes = read_seed(&path)?;
    let count = notes.len();
    for note in notes {
        store.append(note)?;
    }
    info!(count, path = %path.as_ref().display(), "seed notes loaded");
    Ok(count)
}
