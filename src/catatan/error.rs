use crate::model::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Catatan tidak ditemukan: {0}")]
    NoteNotFound(NoteId),

    #[error("ID catatan sudah dipakai: {0}")]
    DuplicateId(NoteId),

    #[error("Catatan nomor {0} tidak ada di daftar")]
    ItemNotFound(usize),

    #[error("Catatan nomor {0} tersembunyi oleh pencarian")]
    ItemHidden(usize),

    #[error("Tidak ada dialog konfirmasi yang terbuka")]
    NoDialogOpen,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotesError>;
