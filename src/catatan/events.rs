//! Child-to-parent messaging.
//!
//! Components never call their parent. They hold an [`EventEmitter`] and post [`AppEvent`]s into
//! a channel; the facade owns the matching [`EventQueue`], drains it after every user action, and
//! delivers each event to the components whose trigger list names its [`EventKind`].

use crate::model::{Note, NoteId};
use std::sync::mpsc::{channel, Receiver, Sender};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A note was added to the store by the creator form.
    NoteCreated { note: Note },
    /// An item asked for its note's archived flag to be flipped.
    ToggleArchive { id: NoteId },
    /// An item's delete dialog was confirmed.
    DeleteNote { id: NoteId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    NoteCreated,
    ToggleArchive,
    DeleteNote,
}

impl AppEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            AppEvent::NoteCreated { .. } => EventKind::NoteCreated,
            AppEvent::ToggleArchive { .. } => EventKind::ToggleArchive,
            AppEvent::DeleteNote { .. } => EventKind::DeleteNote,
        }
    }
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::NoteCreated => "note-created",
            EventKind::ToggleArchive => "toggle-archive",
            EventKind::DeleteNote => "delete-note",
        }
    }
}

/// Sending half handed to components.
#[derive(Debug, Clone)]
pub struct EventEmitter {
    tx: Sender<AppEvent>,
}

impl EventEmitter {
    pub fn emit(&self, event: AppEvent) {
        let kind = event.kind();
        if self.tx.send(event).is_err() {
            warn!(event = kind.name(), "event dropped, queue is gone");
        }
    }
}

/// Receiving half owned by the facade.
///
/// The queue keeps a sender of its own, so the channel stays open while components come and go.
#[derive(Debug)]
pub struct EventQueue {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            tx: self.tx.clone(),
        }
    }

    /// Everything posted since the last drain, in posting order.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_posting_order() {
        let queue = EventQueue::new();
        let emitter = queue.emitter();
        emitter.emit(AppEvent::ToggleArchive {
            id: NoteId::from("a"),
        });
        emitter.emit(AppEvent::DeleteNote {
            id: NoteId::from("b"),
        });

        let kinds: Vec<_> = queue.drain().iter().map(AppEvent::kind).collect();
        assert_eq!(kinds, vec![EventKind::ToggleArchive, EventKind::DeleteNote]);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn queue_outlives_dropped_emitters() {
        let queue = EventQueue::new();
        drop(queue.emitter());
        queue.emitter().emit(AppEvent::DeleteNote {
            id: NoteId::from("x"),
        });
        assert_eq!(queue.drain().len(), 1);
    }
}
