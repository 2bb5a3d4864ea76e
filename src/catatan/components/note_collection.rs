//! The note list: derives the filtered view set from the store, owns the items, applies the
//! search box, and turns item events into store mutations.
//!
//! Every re-render rebuilds all items from the store and resets the search term. Search itself
//! only flips per-item visibility; it never re-renders.

use super::note_item::{ItemView, NoteItem};
use super::{Component, Trigger};
use crate::attributes::Attributes;
use crate::error::{NotesError, Result};
use crate::events::{AppEvent, EventEmitter, EventKind};
use crate::model::{FilterMode, NoteId};
use crate::store::NoteStore;
use serde::Serialize;
use tracing::{debug, info, warn};

pub const ATTR_FILTER: &str = "filter";

const TRIGGERS: &[Trigger] = &[
    Trigger::Attribute(ATTR_FILTER),
    Trigger::Event(EventKind::NoteCreated),
    Trigger::Event(EventKind::ToggleArchive),
    Trigger::Event(EventKind::DeleteNote),
];

pub const SEARCH_PLACEHOLDER: &str = "Cari catatan...";

struct Entry {
    item: NoteItem,
    visible: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryView {
    /// 1-based position used to address the item.
    pub index: usize,
    pub visible: bool,
    pub item: ItemView,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CollectionView {
    pub search_placeholder: &'static str,
    pub search_term: String,
    pub filter: FilterMode,
    pub info: String,
    pub count: usize,
    pub visible_count: usize,
    pub empty_message: Option<&'static str>,
    pub items: Vec<EntryView>,
}

pub struct NoteCollection {
    attrs: Attributes,
    emitter: EventEmitter,
    filter: FilterMode,
    search_term: String,
    entries: Vec<Entry>,
    mounted: bool,
    renders: usize,
}

impl NoteCollection {
    pub fn new(emitter: EventEmitter) -> Self {
        Self {
            attrs: Attributes::new(),
            emitter,
            filter: FilterMode::All,
            search_term: String::new(),
            entries: Vec::new(),
            mounted: false,
            renders: 0,
        }
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Size of the view set, independent of search.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }

    /// Ids of the rendered items, in display order.
    pub fn rendered_ids(&self) -> Vec<NoteId> {
        self.entries.iter().filter_map(|e| e.item.id()).collect()
    }

    /// Shows only the items whose title or body contains `term`, ignoring case.
    pub fn search(&mut self, term: &str) {
        self.search_term = term.to_string();
        for entry in &mut self.entries {
            entry.visible = entry.item.matches_search(term);
        }
        debug!(
            term,
            visible = self.visible_count(),
            total = self.entries.len(),
            "search applied"
        );
    }

    /// The item at 1-based position `n`. Hidden items cannot be addressed.
    pub fn item(&self, n: usize) -> Result<&NoteItem> {
        let entry = self.entry_index(n).map(|i| &self.entries[i])?;
        Ok(&entry.item)
    }

    pub fn item_mut(&mut self, n: usize) -> Result<&mut NoteItem> {
        let index = self.entry_index(n)?;
        Ok(&mut self.entries[index].item)
    }

    /// The item whose delete dialog is open, if any.
    pub fn open_dialog(&mut self) -> Option<&mut NoteItem> {
        self.entries
            .iter_mut()
            .map(|e| &mut e.item)
            .find(|item| item.is_dialog_open())
    }

    pub fn has_open_dialog(&self) -> bool {
        self.entries.iter().any(|e| e.item.is_dialog_open())
    }

    pub fn view(&self) -> CollectionView {
        let count = self.entries.len();
        let items = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                entry.item.view().map(|item| EntryView {
                    index: i + 1,
                    visible: entry.visible,
                    item,
                })
            })
            .collect();

        CollectionView {
            search_placeholder: SEARCH_PLACEHOLDER,
            search_term: self.search_term.clone(),
            filter: self.filter,
            info: format!(
                "Menampilkan {} ({} catatan)",
                self.filter.description(),
                count
            ),
            count,
            visible_count: self.visible_count(),
            empty_message: (count == 0).then(|| self.filter.empty_message()),
            items,
        }
    }

    fn entry_index(&self, n: usize) -> Result<usize> {
        let index = n.checked_sub(1).ok_or(NotesError::ItemNotFound(n))?;
        match self.entries.get(index) {
            None => Err(NotesError::ItemNotFound(n)),
            Some(entry) if !entry.visible => Err(NotesError::ItemHidden(n)),
            Some(_) => Ok(index),
        }
    }

    fn teardown_items(&mut self) {
        for entry in &mut self.entries {
            entry.item.teardown();
        }
        self.entries.clear();
    }

    fn render(&mut self, store: &dyn NoteStore) -> Result<()> {
        let filter = FilterMode::from_attribute(self.attrs.get(ATTR_FILTER));
        self.filter = filter;
        self.search_term.clear();
        self.teardown_items();

        for note in store.notes().iter().filter(|n| filter.admits(n)) {
            let mut item = NoteItem::for_note(note, self.emitter.clone());
            item.initialize(store)?;
            self.entries.push(Entry {
                item,
                visible: true,
            });
        }

        self.renders += 1;
        debug!(
            filter = %self.filter,
            count = self.entries.len(),
            "collection rendered"
        );
        Ok(())
    }

    /// Applies one store mutation, treating an unknown id as a no-op.
    fn apply(&self, outcome: Result<()>, event: &AppEvent) -> Result<bool> {
        match outcome {
            Ok(()) => Ok(true),
            Err(NotesError::NoteNotFound(id)) => {
                warn!(event = event.kind().name(), %id, "no such note, event ignored");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

impl Component for NoteCollection {
    fn name(&self) -> &'static str {
        "note-collection"
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

    fn initialize(&mut self, store: &dyn NoteStore) -> Result<()> {
        self.mounted = true;
        self.render(store)
    }

    fn attribute_changed(
        &mut self,
        _name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
        store: &dyn NoteStore,
    ) -> Result<bool> {
        if !self.mounted {
            return Ok(false);
        }
        self.render(store)?;
        Ok(true)
    }

    fn handle_event(&mut self, event: &AppEvent, store: &mut dyn NoteStore) -> Result<bool> {
        if !self.mounted {
            return Ok(false);
        }

        let changed = match event {
            AppEvent::NoteCreated { .. } => true,
            AppEvent::ToggleArchive { id } => {
                let outcome = store.toggle_archived(id).map(|archived| {
                    info!(%id, archived, "archive flag toggled");
                });
                self.apply(outcome, event)?
            }
            AppEvent::DeleteNote { id } => {
                let outcome = store.remove(id).map(|note| {
                    info!(%id, title = %note.title, "note deleted");
                });
                self.apply(outcome, event)?
            }
        };

        if changed {
            self.render(&*store)?;
        }
        Ok(changed)
    }

    fn escape_pressed(&mut self) -> bool {
        self.entries
            .iter_mut()
            .fold(false, |closed, e| e.item.escape_pressed() || closed)
    }

    fn teardown(&mut self) {
        self.teardown_items();
        self.search_term.clear();
        self.mounted = false;
    }

    fn renders(&self) -> usize {
        self.renders
    }
}
