//! # API Facade
//!
//! [`CatatanApi`] is the single entry point for driving a notes board, regardless of the UI
//! drawing it. It owns the store, every component, the event channel and the clock.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Routes user actions** to the component that owns them (form input to the creator, item
//!   clicks to the collection's items, filter clicks through the toolbar)
//! - **Normalizes inputs** (1-based item positions, filter modes, themes)
//! - **Pumps events**: after every action it drains the event channel and hands each event to
//!   every component whose trigger list names it, until the channel is empty
//! - **Returns structured types** (`Result<CmdResult>`) and serializable views
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: validation, filtering and store mutation belong to the components
//! - **I/O**: no stdout, stderr or file access
//! - **Presentation**: [`AppView`] is data; turning it into text is the UI's job
//!
//! ## Generic Over NoteStore
//!
//! `CatatanApi<S: NoteStore>` is generic over the storage backend, and the clock is injected,
//! so tests can drive whole sessions with a `MemoryStore` and a manual clock.

use crate::clock::{Clock, SystemClock};
use crate::components::chrome::{AppFooter, AppHeader, FooterView, HeaderView, ATTR_THEME};
use crate::components::note_collection::{CollectionView, NoteCollection, ATTR_FILTER};
use crate::components::note_creator::{
    CreatorView, NoteCreator, SubmitOutcome, ATTR_MAX_BODY, ATTR_MAX_TITLE,
};
use crate::components::toolbar::{FilterToolbar, ToolbarView};
use crate::components::Component;
use crate::config::{NotesConfig, Theme};
use crate::error::{NotesError, Result};
use crate::events::{AppEvent, EventKind, EventQueue};
use crate::model::{FilterMode, Note, NoteId};
use crate::store::NoteStore;
use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Events dispatched while handling the action, in dispatch order.
    pub events: Vec<EventKind>,
    pub affected_notes: Vec<Note>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }
}

/// Which overlay currently captures input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overlay {
    Notification,
    DeleteDialog,
}

/// A snapshot of the whole board.
#[derive(Debug, Clone, Serialize)]
pub struct AppView {
    pub header: HeaderView,
    pub creator: CreatorView,
    pub toolbar: ToolbarView,
    pub collection: CollectionView,
    pub footer: FooterView,
    pub overlay: Option<Overlay>,
}

pub struct CatatanApi<S: NoteStore> {
    store: S,
    header: AppHeader,
    creator: NoteCreator,
    toolbar: FilterToolbar,
    collection: NoteCollection,
    footer: AppFooter,
    queue: EventQueue,
    clock: Box<dyn Clock>,
}

impl<S: NoteStore> CatatanApi<S> {
    pub fn new(store: S, config: &NotesConfig) -> Result<Self> {
        Self::with_clock(store, config, Box::new(SystemClock))
    }

    /// Builds every component, applies the config as attributes, and mounts them.
    pub fn with_clock(store: S, config: &NotesConfig, clock: Box<dyn Clock>) -> Result<Self> {
        let queue = EventQueue::new();
        let year = clock.now().with_timezone(&Local).year();

        let mut api = Self {
            header: AppHeader::new(),
            creator: NoteCreator::new(queue.emitter(), config.notification_timeout()),
            toolbar: FilterToolbar::new(),
            collection: NoteCollection::new(queue.emitter()),
            footer: AppFooter::new(year),
            store,
            queue,
            clock,
        };

        let max_title = config.max_title_length.to_string();
        let max_body = config.max_body_length.to_string();
        api.creator
            .set_attribute(ATTR_MAX_TITLE, Some(&max_title), &api.store)?;
        api.creator
            .set_attribute(ATTR_MAX_BODY, Some(&max_body), &api.store)?;
        api.header
            .set_attribute(ATTR_THEME, Some(config.theme.as_str()), &api.store)?;

        api.header.initialize(&api.store)?;
        api.creator.initialize(&api.store)?;
        api.collection.initialize(&api.store)?;
        api.footer.initialize(&api.store)?;
        Ok(api)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn creator(&self) -> &NoteCreator {
        &self.creator
    }

    pub fn collection(&self) -> &NoteCollection {
        &self.collection
    }

    pub fn header(&self) -> &AppHeader {
        &self.header
    }

    pub fn input_title(&mut self, value: &str) -> Result<CmdResult> {
        self.creator.input_title(value);
        self.pump()
    }

    pub fn input_body(&mut self, value: &str) -> Result<CmdResult> {
        self.creator.input_body(value);
        self.pump()
    }

    pub fn submit(&mut self) -> Result<CmdResult> {
        let now = self.clock.now();
        let at = self.clock.instant();
        let outcome = self.creator.submit(&mut self.store, now, at)?;
        let result = self.pump()?;
        Ok(match outcome {
            SubmitOutcome::Created(note) => result.with_affected_notes(vec![note]),
            SubmitOutcome::Rejected => result,
        })
    }

    /// Clicks a toolbar button.
    pub fn select_filter(&mut self, mode: FilterMode) -> Result<CmdResult> {
        let value = self.toolbar.select(mode);
        self.collection
            .set_attribute(ATTR_FILTER, value, &self.store)?;
        self.pump()
    }

    /// Types into the search box. An empty term shows every item again.
    pub fn search(&mut self, term: &str) -> Result<CmdResult> {
        self.collection.search(term);
        let mut result = self.pump()?;
        if !term.is_empty() && self.collection.visible_count() == 0 {
            result.add_message(CmdMessage::info(format!(
                "Tidak ada catatan yang cocok dengan \"{}\"",
                term
            )));
        }
        Ok(result)
    }

    /// Clicks the archive toggle of the item at 1-based position `n`.
    pub fn toggle_archive(&mut self, n: usize) -> Result<CmdResult> {
        let item = self.collection.item(n)?;
        let id = item.id();
        item.click_archive();

        let mut result = self.pump()?;
        if let Some(note) = id.and_then(|id| self.store.get(&id).ok().cloned()) {
            let verb = if note.archived {
                "diarsipkan"
            } else {
                "dikembalikan"
            };
            result.add_message(CmdMessage::success(format!(
                "Catatan \"{}\" {}",
                note.title, verb
            )));
            result.affected_notes.push(note);
        }
        Ok(result)
    }

    /// Clicks the delete button of the item at 1-based position `n`, opening its dialog.
    pub fn request_delete(&mut self, n: usize) -> Result<CmdResult> {
        self.collection.item_mut(n)?.click_delete();
        self.pump()
    }

    pub fn confirm_delete(&mut self) -> Result<CmdResult> {
        let item = self.collection.open_dialog().ok_or(NotesError::NoDialogOpen)?;
        let doomed = item.id().and_then(|id| self.store.get(&id).ok().cloned());
        item.click_confirm();

        let mut result = self.pump()?;
        if let Some(note) = doomed {
            if !self.store.contains(&note.id) {
                result.add_message(CmdMessage::success(format!(
                    "Catatan \"{}\" dihapus",
                    note.title
                )));
                result.affected_notes.push(note);
            }
        }
        Ok(result)
    }

    pub fn cancel_delete(&mut self) -> Result<CmdResult> {
        self.collection
            .open_dialog()
            .ok_or(NotesError::NoDialogOpen)?
            .click_cancel();
        self.pump()
    }

    /// The window-level Escape key: every open overlay closes.
    pub fn press_escape(&mut self) -> Result<CmdResult> {
        let mut closed = false;
        for component in self.components() {
            closed |= component.escape_pressed();
        }
        debug!(closed, "escape pressed");
        self.pump()
    }

    /// A click on the backdrop of whatever overlay is open.
    pub fn click_outside(&mut self) -> Result<CmdResult> {
        if !self.creator.click_overlay() {
            if let Some(item) = self.collection.open_dialog() {
                item.click_overlay();
            }
        }
        self.pump()
    }

    /// The popup's OK button.
    pub fn dismiss_notification(&mut self) -> Result<CmdResult> {
        self.creator.dismiss_notification();
        self.pump()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<CmdResult> {
        self.header
            .set_attribute(ATTR_THEME, Some(theme.as_str()), &self.store)?;
        self.pump()
    }

    /// Expires the popup timer if its deadline has passed. Returns true when the popup hid.
    pub fn tick(&mut self) -> bool {
        self.creator.tick(self.clock.instant())
    }

    pub fn overlay(&self) -> Option<Overlay> {
        if self.creator.notification().is_shown() {
            Some(Overlay::Notification)
        } else if self.collection.has_open_dialog() {
            Some(Overlay::DeleteDialog)
        } else {
            None
        }
    }

    pub fn view(&self) -> AppView {
        AppView {
            header: self.header.view(),
            creator: self.creator.view(),
            toolbar: self.toolbar.view(),
            collection: self.collection.view(),
            footer: self.footer.view(),
            overlay: self.overlay(),
        }
    }

    /// Unmounts every component. Events posted afterwards are dropped on the floor.
    pub fn teardown(&mut self) {
        for component in self.components() {
            component.teardown();
        }
    }

    fn components(&mut self) -> [&mut dyn Component; 4] {
        [
            &mut self.header,
            &mut self.creator,
            &mut self.collection,
            &mut self.footer,
        ]
    }

    /// Delivers queued events until the channel is empty.
    fn pump(&mut self) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        loop {
            let events = self.queue.drain();
            if events.is_empty() {
                break;
            }
            for event in events {
                result.events.push(event.kind());
                self.dispatch(&event)?;
            }
        }
        Ok(result)
    }

    fn dispatch(&mut self, event: &AppEvent) -> Result<()> {
        let kind = event.kind();
        let Self {
            store,
            header,
            creator,
            collection,
            footer,
            ..
        } = self;
        let components: [&mut dyn Component; 4] = [header, creator, collection, footer];

        for component in components {
            if !component.reacts_to(kind) {
                continue;
            }
            let rerendered = component.handle_event(event, &mut *store)?;
            debug!(
                component = component.name(),
                event = kind.name(),
                rerendered,
                "event delivered"
            );
        }
        Ok(())
    }

    /// Ids of the rendered items, in display order.
    pub fn rendered_ids(&self) -> Vec<NoteId> {
        self.collection.rendered_ids()
    }
}
