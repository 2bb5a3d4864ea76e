//! The "new note" form and its confirmation popup.

use super::{Component, Trigger};
use crate::attributes::Attributes;
use crate::error::Result;
use crate::events::{AppEvent, EventEmitter};
use crate::model::{
    Note, NoteId, BODY_MIN_CHARS, DEFAULT_MAX_BODY_CHARS, DEFAULT_MAX_TITLE_CHARS,
    TITLE_MIN_CHARS,
};
use crate::store::NoteStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const ATTR_MAX_TITLE: &str = "max-title-length";
pub const ATTR_MAX_BODY: &str = "max-body-length";

const TRIGGERS: &[Trigger] = &[
    Trigger::Attribute(ATTR_MAX_TITLE),
    Trigger::Attribute(ATTR_MAX_BODY),
];

pub const TITLE_ERROR: &str = "Judul wajib diisi (minimal 3 karakter)";
pub const BODY_ERROR: &str = "Isi catatan wajib diisi (minimal 5 karakter)";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Field {
    value: String,
    error_visible: bool,
}

impl Field {
    fn meets(&self, min_chars: usize) -> bool {
        self.value.trim().chars().count() >= min_chars
    }

    /// Replaces the value, cut to `max_chars` characters.
    fn input(&mut self, value: &str, max_chars: usize) {
        self.value = value.chars().take(max_chars).collect();
    }

    fn count(&self) -> usize {
        self.value.chars().count()
    }
}

/// Auto-dismissing confirmation popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notification {
    #[default]
    Hidden,
    /// `deadline` is `None` when the timeout is too far out to represent.
    Shown {
        message: String,
        deadline: Option<Instant>,
    },
}

impl Notification {
    pub fn is_shown(&self) -> bool {
        matches!(self, Notification::Shown { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Notification::Shown { message, .. } => Some(message),
            Notification::Hidden => None,
        }
    }

    /// Shows `message`, replacing any previous one and restarting the timer.
    fn show(&mut self, message: String, deadline: Option<Instant>) {
        *self = Notification::Shown { message, deadline };
    }

    /// Hides the popup and clears its timer. Returns true when it was shown.
    fn hide(&mut self) -> bool {
        let was_shown = self.is_shown();
        *self = Notification::Hidden;
        was_shown
    }

    fn expired(&self, at: Instant) -> bool {
        match self {
            Notification::Shown { deadline, .. } => deadline.is_some_and(|d| at >= d),
            Notification::Hidden => false,
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Created(Note),
    /// Validation failed; the visible error messages say why.
    Rejected,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub counter: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NotificationView {
    pub heading: &'static str,
    pub message: String,
    pub button: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreatorView {
    pub heading: &'static str,
    pub title: FieldView,
    pub body: FieldView,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub notification: Option<NotificationView>,
}

pub struct NoteCreator {
    attrs: Attributes,
    emitter: EventEmitter,
    title: Field,
    body: Field,
    notification: Notification,
    timeout: Duration,
    renders: usize,
}

impl NoteCreator {
    pub fn new(emitter: EventEmitter, timeout: Duration) -> Self {
        Self {
            attrs: Attributes::new(),
            emitter,
            title: Field::default(),
            body: Field::default(),
            notification: Notification::Hidden,
            timeout,
            renders: 0,
        }
    }

    pub fn max_title_length(&self) -> usize {
        self.attrs
            .positive_int(ATTR_MAX_TITLE, DEFAULT_MAX_TITLE_CHARS)
    }

    pub fn max_body_length(&self) -> usize {
        self.attrs.positive_int(ATTR_MAX_BODY, DEFAULT_MAX_BODY_CHARS)
    }

    pub fn title_value(&self) -> &str {
        &self.title.value
    }

    pub fn body_value(&self) -> &str {
        &self.body.value
    }

    pub fn title_error_visible(&self) -> bool {
        self.title.error_visible
    }

    pub fn body_error_visible(&self) -> bool {
        self.body.error_visible
    }

    pub fn submit_enabled(&self) -> bool {
        self.title.meets(TITLE_MIN_CHARS) && self.body.meets(BODY_MIN_CHARS)
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn input_title(&mut self, value: &str) {
        let max = self.max_title_length();
        self.title.input(value, max);
        self.title.error_visible = !self.title.meets(TITLE_MIN_CHARS);
    }

    pub fn input_body(&mut self, value: &str) {
        let max = self.max_body_length();
        self.body.input(value, max);
        self.body.error_visible = !self.body.meets(BODY_MIN_CHARS);
    }

    /// Validates and, when both fields pass, prepends a new note to the store and announces it.
    pub fn submit(
        &mut self,
        store: &mut dyn NoteStore,
        now: DateTime<Utc>,
        at: Instant,
    ) -> Result<SubmitOutcome> {
        self.title.error_visible = !self.title.meets(TITLE_MIN_CHARS);
        self.body.error_visible = !self.body.meets(BODY_MIN_CHARS);
        if !self.submit_enabled() {
            debug!("submit rejected by validation");
            return Ok(SubmitOutcome::Rejected);
        }

        let id = unique_id(store, now.timestamp_millis());
        let note = Note::new(id, self.title.value.trim(), self.body.value.trim(), now);
        store.insert_front(note.clone())?;
        info!(id = %note.id, title = %note.title, "note created");

        self.emitter.emit(AppEvent::NoteCreated { note: note.clone() });
        self.reset();
        self.notification.show(
            format!("Catatan \"{}\" berhasil disimpan!", note.title),
            at.checked_add(self.timeout),
        );
        Ok(SubmitOutcome::Created(note))
    }

    /// The popup's OK button.
    pub fn dismiss_notification(&mut self) -> bool {
        self.notification.hide()
    }

    pub fn click_overlay(&mut self) -> bool {
        self.notification.hide()
    }

    /// Hides the popup once its deadline has passed. Returns true when it hid.
    pub fn tick(&mut self, at: Instant) -> bool {
        if self.notification.expired(at) {
            debug!("notification timed out");
            return self.notification.hide();
        }
        false
    }

    pub fn view(&self) -> CreatorView {
        CreatorView {
            heading: "Buat Catatan Baru",
            title: FieldView {
                label: "Judul",
                placeholder: "Judul catatan...",
                value: self.title.value.clone(),
                counter: format!("{}/{}", self.title.count(), self.max_title_length()),
                error: self.title.error_visible.then_some(TITLE_ERROR),
            },
            body: FieldView {
                label: "Isi Catatan",
                placeholder: "Tulis catatan di sini...",
                value: self.body.value.clone(),
                counter: format!("{}/{}", self.body.count(), self.max_body_length()),
                error: self.body.error_visible.then_some(BODY_ERROR),
            },
            submit_label: "Simpan Catatan",
            submit_enabled: self.submit_enabled(),
            notification: self.notification.message().map(|message| NotificationView {
                heading: "Sukses",
                message: message.to_string(),
                button: "OK",
            }),
        }
    }

    fn reset(&mut self) {
        self.title = Field::default();
        self.body = Field::default();
    }
}

/// `note-<millis>`, bumped by one millisecond until no stored note has it.
fn unique_id(store: &dyn NoteStore, millis: i64) -> NoteId {
    let mut millis = millis;
    loop {
        let id = NoteId::from_millis(millis);
        if !store.contains(&id) {
            return id;
        }
        millis += 1;
    }
}

impl Component for NoteCreator {
    fn name(&self) -> &'static str {
        "note-creator"
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
        self.reset();
        self.renders += 1;
        Ok(())
    }

    // Limits are read from the attributes on demand; nothing to redraw.
    fn attribute_changed(
        &mut self,
        name: &str,
        _old: Option<&str>,
        new: Option<&str>,
        _store: &dyn NoteStore,
    ) -> Result<bool> {
        debug!(attribute = name, value = ?new, "creator limit changed");
        Ok(false)
    }

    fn escape_pressed(&mut self) -> bool {
        self.notification.hide()
    }

    fn teardown(&mut self) {
        self.notification.hide();
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
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 8, 30, 0).unwrap()
    }

    fn creator(queue: &EventQueue) -> NoteCreator {
        let mut creator = NoteCreator::new(queue.emitter(), Duration::from_secs(5));
        creator.initialize(&MemoryStore::new()).unwrap();
        creator
    }

    #[test]
    fn short_input_keeps_submit_disabled() {
        let queue = EventQueue::new();
        let mut store = MemoryStore::new();
        let mut creator = creator(&queue);

        creator.input_title("Hi");
        creator.input_body("World!");
        assert!(!creator.submit_enabled());

        creator.input_title("  Hello  ");
        creator.input_body("  abc ");
        assert!(!creator.submit_enabled());

        let outcome = creator
            .submit(&mut store, fixed_now(), Instant::now())
            .unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected));
        assert!(store.is_empty());
        assert!(queue.drain().is_empty());
        assert!(!creator.notification().is_shown());
    }

    #[test]
    fn errors_appear_only_after_input() {
        let queue = EventQueue::new();
        let mut creator = creator(&queue);
        let view = creator.view();
        assert_eq!(view.title.error, None);
        assert_eq!(view.body.error, None);

        creator.input_title("ab");
        assert_eq!(creator.view().title.error, Some(TITLE_ERROR));
        assert_eq!(creator.view().body.error, None);

        creator.input_title("abc");
        assert_eq!(creator.view().title.error, None);
    }

    #[test]
    fn rejected_submit_shows_both_errors() {
        let queue = EventQueue::new();
        let mut store = MemoryStore::new();
        let mut creator = creator(&queue);

        creator
            .submit(&mut store, fixed_now(), Instant::now())
            .unwrap();
        assert!(creator.title_error_visible());
        assert!(creator.body_error_visible());
    }

    #[test]
    fn valid_submit_prepends_and_announces_once() {
        let queue = EventQueue::new();
        let mut store = MemoryStore::new();
        store
            .append(Note::new(NoteId::from("old"), "Lama", "Catatan lama", fixed_now()))
            .unwrap();
        let mut creator = creator(&queue);

        creator.input_title(" Hello ");
        creator.input_body("World!");
        assert!(creator.submit_enabled());
        let note = match creator
            .submit(&mut store, fixed_now(), Instant::now())
            .unwrap()
        {
            SubmitOutcome::Created(note) => note,
            SubmitOutcome::Rejected => panic!("Expected a created note"),
        };

        assert_eq!(note.title, "Hello");
        assert!(!note.archived);
        assert_eq!(note.created_at, "2026-10-17T08:30:00.000Z");
        assert_eq!(store.notes()[0], note);
        assert_eq!(store.len(), 2);

        let kinds: Vec<_> = queue.drain().iter().map(AppEvent::kind).collect();
        assert_eq!(kinds, vec![EventKind::NoteCreated]);

        let view = creator.view();
        assert_eq!(view.title.value, "");
        assert_eq!(view.title.counter, "0/50");
        assert_eq!(view.title.error, None);
        assert!(!view.submit_enabled);
        let popup = view.notification.unwrap();
        assert_eq!(popup.heading, "Sukses");
        assert_eq!(popup.message, "Catatan \"Hello\" berhasil disimpan!");
    }

    #[test]
    fn colliding_ids_are_bumped() {
        let queue = EventQueue::new();
        let mut store = MemoryStore::new();
        let mut creator = creator(&queue);
        let now = fixed_now();

        for _ in 0..2 {
            creator.input_title("Hello");
            creator.input_body("World!");
            creator.submit(&mut store, now, Instant::now()).unwrap();
        }

        let millis = now.timestamp_millis();
        let ids: Vec<_> = store.notes().iter().map(|n| n.id.clone()).collect();
        assert_eq!(
            ids,
            vec![NoteId::from_millis(millis + 1), NoteId::from_millis(millis)]
        );
    }

    #[test]
    fn input_is_cut_to_max_length() {
        let queue = EventQueue::new();
        let store = MemoryStore::new();
        let mut creator = creator(&queue);

        creator
            .set_attribute(ATTR_MAX_TITLE, Some("5"), &store)
            .unwrap();
        creator.input_title("Catatan panjang");
        assert_eq!(creator.title_value(), "Catat");
        assert_eq!(creator.view().title.counter, "5/5");
    }

    #[test]
    fn bad_limits_fall_back_without_rerender() {
        let queue = EventQueue::new();
        let store = MemoryStore::new();
        let mut creator = creator(&queue);

        assert!(!creator
            .set_attribute(ATTR_MAX_BODY, Some("lots"), &store)
            .unwrap());
        assert_eq!(creator.max_body_length(), 1000);
        creator
            .set_attribute(ATTR_MAX_TITLE, Some("-3"), &store)
            .unwrap();
        assert_eq!(creator.max_title_length(), 50);
        assert_eq!(creator.renders(), 1);
    }

    #[test]
    fn popup_hides_on_timeout_and_restarts_on_resubmit() {
        let queue = EventQueue::new();
        let mut store = MemoryStore::new();
        let mut creator = creator(&queue);
        let start = Instant::now();

        creator.input_title("Hello");
        creator.input_body("World!");
        creator.submit(&mut store, fixed_now(), start).unwrap();

        assert!(!creator.tick(start + Duration::from_secs(3)));
        creator.input_title("Kedua");
        creator.input_body("Catatan kedua");
        creator
            .submit(&mut store, fixed_now(), start + Duration::from_secs(3))
            .unwrap();
        assert_eq!(
            creator.notification().message(),
            Some("Catatan \"Kedua\" berhasil disimpan!")
        );

        assert!(!creator.tick(start + Duration::from_secs(6)));
        assert!(creator.tick(start + Duration::from_secs(8)));
        assert!(!creator.notification().is_shown());
    }

    #[test]
    fn popup_closes_on_ok_escape_or_overlay() {
        let queue = EventQueue::new();
        let mut store = MemoryStore::new();
        let mut creator = creator(&queue);

        let mut show = |creator: &mut NoteCreator| {
            creator.input_title("Hello");
            creator.input_body("World!");
            creator
                .submit(&mut store, fixed_now(), Instant::now())
                .unwrap();
        };

        show(&mut creator);
        assert!(creator.dismiss_notification());
        show(&mut creator);
        assert!(creator.escape_pressed());
        show(&mut creator);
        assert!(creator.click_overlay());
        assert!(!creator.click_overlay());
    }

    #[test]
    fn huge_timeout_never_expires() {
        let queue = EventQueue::new();
        let mut store = MemoryStore::new();
        let mut creator = NoteCreator::new(queue.emitter(), Duration::from_secs(u64::MAX));
        creator.initialize(&store).unwrap();

        let start = Instant::now();
        creator.input_title("Hello");
        creator.input_body("World!");
        let outcome = creator.submit(&mut store, fixed_now(), start).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        assert_eq!(store.len(), 1);
        assert!(creator.notification().is_shown());
        assert!(!creator.tick(start + Duration::from_secs(3600)));
        assert!(creator.dismiss_notification());
    }
}
