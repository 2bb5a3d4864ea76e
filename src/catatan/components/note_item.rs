//! One note card: title, body, date, status badge, and the archive/delete actions.
//!
//! The item never touches the store. Archive and confirmed delete are posted as events carrying
//! the `id` attribute; the collection applies them and rebuilds every item, which is how the
//! badge ends up reflecting the new archived flag.

use super::{Component, Trigger};
use crate::attributes::Attributes;
use crate::error::Result;
use crate::events::{AppEvent, EventEmitter};
use crate::format::format_created_at;
use crate::model::{iso_timestamp, Note, NoteId};
use crate::store::NoteStore;
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

pub const ATTR_ID: &str = "id";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_BODY: &str = "body";
pub const ATTR_CREATED_AT: &str = "created-at";
pub const ATTR_ARCHIVED: &str = "archived";

const TRIGGERS: &[Trigger] = &[
    Trigger::Attribute(ATTR_ID),
    Trigger::Attribute(ATTR_TITLE),
    Trigger::Attribute(ATTR_BODY),
    Trigger::Attribute(ATTR_CREATED_AT),
    Trigger::Attribute(ATTR_ARCHIVED),
];

const UNTITLED: &str = "Untitled Note";
const NO_CONTENT: &str = "No content";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DialogView {
    pub heading: &'static str,
    pub question: &'static str,
    pub title: String,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub archived: bool,
    pub status_label: &'static str,
    pub archive_label: &'static str,
    pub delete_label: &'static str,
    pub dialog: Option<DialogView>,
}

pub struct NoteItem {
    attrs: Attributes,
    emitter: EventEmitter,
    dialog: DialogState,
    rendered: Option<ItemView>,
    renders: usize,
}

impl NoteItem {
    pub fn new(emitter: EventEmitter) -> Self {
        Self {
            attrs: Attributes::new(),
            emitter,
            dialog: DialogState::Closed,
            rendered: None,
            renders: 0,
        }
    }

    /// Copies a note record onto a fresh item's attributes. `archived` is only set when true.
    pub fn for_note(note: &Note, emitter: EventEmitter) -> Self {
        let mut item = Self::new(emitter);
        item.attrs.set(ATTR_ID, Some(note.id.as_str()));
        item.attrs.set(ATTR_TITLE, Some(&note.title));
        item.attrs.set(ATTR_BODY, Some(&note.body));
        item.attrs.set(ATTR_CREATED_AT, Some(&note.created_at));
        if note.archived {
            item.attrs.set(ATTR_ARCHIVED, Some("true"));
        }
        item
    }

    pub fn id(&self) -> Option<NoteId> {
        self.attrs.get(ATTR_ID).map(NoteId::from)
    }

    pub fn title(&self) -> &str {
        non_empty(self.attrs.get(ATTR_TITLE)).unwrap_or(UNTITLED)
    }

    pub fn body(&self) -> &str {
        non_empty(self.attrs.get(ATTR_BODY)).unwrap_or(NO_CONTENT)
    }

    pub fn created_at(&self) -> String {
        non_empty(self.attrs.get(ATTR_CREATED_AT))
            .map(str::to_string)
            .unwrap_or_else(|| iso_timestamp(Utc::now()))
    }

    pub fn is_archived(&self) -> bool {
        self.attrs.get(ATTR_ARCHIVED) == Some("true")
    }

    pub fn dialog_state(&self) -> DialogState {
        self.dialog
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog == DialogState::Open
    }

    /// Case-insensitive match against the raw `title`/`body` attributes.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let title = self.attrs.get(ATTR_TITLE).unwrap_or_default().to_lowercase();
        let body = self.attrs.get(ATTR_BODY).unwrap_or_default().to_lowercase();
        title.contains(&term) || body.contains(&term)
    }

    pub fn click_archive(&self) {
        self.emit_with_id(|id| AppEvent::ToggleArchive { id });
    }

    pub fn click_delete(&mut self) {
        self.dialog = DialogState::Open;
    }

    pub fn click_cancel(&mut self) -> bool {
        self.close_dialog()
    }

    pub fn click_overlay(&mut self) -> bool {
        self.close_dialog()
    }

    /// Closes the dialog, then asks for deletion. Does nothing while the dialog is closed.
    pub fn click_confirm(&mut self) -> bool {
        if !self.close_dialog() {
            return false;
        }
        self.emit_with_id(|id| AppEvent::DeleteNote { id });
        true
    }

    /// The last rendered snapshot with the current dialog state, or `None` before mounting.
    pub fn view(&self) -> Option<ItemView> {
        let mut view = self.rendered.clone()?;
        if self.is_dialog_open() {
            view.dialog = Some(DialogView {
                heading: "Konfirmasi Penghapusan",
                question: "Apakah Anda yakin ingin menghapus catatan ini?",
                title: view.title.clone(),
                cancel_label: "Batal",
                confirm_label: "Hapus",
            });
        }
        Some(view)
    }

    fn close_dialog(&mut self) -> bool {
        let was_open = self.is_dialog_open();
        self.dialog = DialogState::Closed;
        was_open
    }

    fn emit_with_id(&self, event: impl FnOnce(NoteId) -> AppEvent) {
        match self.id() {
            Some(id) => self.emitter.emit(event(id)),
            None => warn!("note item has no id, action ignored"),
        }
    }

    fn render(&mut self) {
        let archived = self.is_archived();
        self.rendered = Some(ItemView {
            id: self.attrs.get(ATTR_ID).unwrap_or_default().to_string(),
            title: self.title().to_string(),
            body: self.body().to_string(),
            date: format_created_at(&self.created_at()),
            archived,
            status_label: if archived { "Diarsipkan" } else { "Aktif" },
            archive_label: if archived { "Kembalikan" } else { "Arsipkan" },
            delete_label: "Hapus",
            dialog: None,
        });
        self.renders += 1;
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Component for NoteItem {
    fn name(&self) -> &'static str {
        "note-item"
    }

    fn triggers(&self) -> &'static [Trigger] {
        TRIGGERS
    }

    fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    fn initialize(&mut self, _store: &dyn NoteStore) -> Result<()> {
        self.render();
        Ok(())
    }

    fn attribute_changed(
        &mut self,
        _name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
        _store: &dyn NoteStore,
    ) -> Result<bool> {
        if self.rendered.is_none() {
            return Ok(false);
        }
        self.render();
        Ok(true)
    }

    fn escape_pressed(&mut self) -> bool {
        self.close_dialog()
    }

    fn teardown(&mut self) {
        self.dialog = DialogState::Closed;
        self.rendered = None;
    }

    fn renders(&self) -> usize {
        self.renders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventKind, EventQueue};
    use crate::store::memory::MemoryStore;

    fn mounted(note: &Note, queue: &EventQueue) -> NoteItem {
        let mut item = NoteItem::for_note(note, queue.emitter());
        item.initialize(&MemoryStore::new()).unwrap();
        item
    }

    fn sample(archived: bool) -> Note {
        let mut note = Note::new(NoteId::from("note-1"), "Belanja", "Beli sayur", Utc::now());
        note.archived = archived;
        note
    }

    #[test]
    fn renders_status_badge_from_archived_attribute() {
        let queue = EventQueue::new();
        let active = mounted(&sample(false), &queue).view().unwrap();
        assert_eq!(active.status_label, "Aktif");
        assert_eq!(active.archive_label, "Arsipkan");

        let archived = mounted(&sample(true), &queue).view().unwrap();
        assert_eq!(archived.status_label, "Diarsipkan");
        assert_eq!(archived.archive_label, "Kembalikan");
    }

    #[test]
    fn missing_attributes_fall_back() {
        let queue = EventQueue::new();
        let mut item = NoteItem::new(queue.emitter());
        item.initialize(&MemoryStore::new()).unwrap();

        let view = item.view().unwrap();
        assert_eq!(view.title, "Untitled Note");
        assert_eq!(view.body, "No content");
        assert!(!view.archived);
        assert_ne!(view.date, crate::format::INVALID_DATE);
    }

    #[test]
    fn archived_needs_literal_true() {
        let queue = EventQueue::new();
        let mut item = NoteItem::new(queue.emitter());
        item.attributes_mut().set(ATTR_ARCHIVED, Some("yes"));
        assert!(!item.is_archived());
        item.attributes_mut().set(ATTR_ARCHIVED, Some("true"));
        assert!(item.is_archived());
    }

    #[test]
    fn archive_click_emits_without_local_change() {
        let queue = EventQueue::new();
        let item = mounted(&sample(false), &queue);
        item.click_archive();

        let events = queue.drain();
        assert_eq!(
            events,
            vec![AppEvent::ToggleArchive {
                id: NoteId::from("note-1")
            }]
        );
        assert!(!item.is_archived());
        assert_eq!(item.view().unwrap().status_label, "Aktif");
    }

    #[test]
    fn dialog_opens_and_cancels_without_events() {
        let queue = EventQueue::new();
        let mut item = mounted(&sample(false), &queue);

        item.click_delete();
        assert_eq!(item.dialog_state(), DialogState::Open);
        let dialog = item.view().unwrap().dialog.unwrap();
        assert_eq!(dialog.title, "Belanja");

        assert!(item.click_cancel());
        assert_eq!(item.dialog_state(), DialogState::Closed);

        item.click_delete();
        assert!(item.click_overlay());

        item.click_delete();
        assert!(item.escape_pressed());
        assert!(!item.escape_pressed());

        assert!(queue.drain().is_empty());
    }

    #[test]
    fn confirm_closes_then_emits_delete() {
        let queue = EventQueue::new();
        let mut item = mounted(&sample(false), &queue);

        assert!(!item.click_confirm());
        assert!(queue.drain().is_empty());

        item.click_delete();
        assert!(item.click_confirm());
        assert!(!item.is_dialog_open());

        let kinds: Vec<_> = queue.drain().iter().map(AppEvent::kind).collect();
        assert_eq!(kinds, vec![EventKind::DeleteNote]);
    }

    #[test]
    fn attribute_change_rerenders_once_mounted() {
        let queue = EventQueue::new();
        let store = MemoryStore::new();
        let mut item = NoteItem::for_note(&sample(false), queue.emitter());

        assert!(!item.set_attribute(ATTR_TITLE, Some("Awal"), &store).unwrap());
        item.initialize(&store).unwrap();
        assert_eq!(item.renders(), 1);

        assert!(item.set_attribute(ATTR_TITLE, Some("Baru"), &store).unwrap());
        assert!(!item.set_attribute(ATTR_TITLE, Some("Baru"), &store).unwrap());
        assert!(!item.set_attribute("data-extra", Some("x"), &store).unwrap());

        assert_eq!(item.renders(), 2);
        assert_eq!(item.view().unwrap().title, "Baru");
    }

    #[test]
    fn search_matches_title_or_body_ignoring_case() {
        let queue = EventQueue::new();
        let item = mounted(&sample(false), &queue);
        assert!(item.matches_search("BELANJA"));
        assert!(item.matches_search("sayur"));
        assert!(item.matches_search(""));
        assert!(!item.matches_search("rapat"));
    }
}
