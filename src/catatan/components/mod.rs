//! # Components
//!
//! Each UI fragment of the board is a view model implementing [`Component`]. A component keeps
//! its own string attributes, renders itself into a serializable view snapshot, and talks to its
//! parent only through [`EventEmitter`](crate::events::EventEmitter).
//!
//! ## Lifecycle
//!
//! ```text
//!   new ──► set_attribute* ──► initialize ──► (attribute_changed | handle_event | escape)* ──► teardown
//! ```
//!
//! - `initialize` mounts the component and performs the first render.
//! - `set_attribute` stores the value; when the attribute is in the trigger list and the value
//!   changed, `attribute_changed` decides whether to re-render.
//! - `handle_event` is only called for event kinds in the trigger list.
//! - `teardown` closes overlays, clears timers and tears children down. Events delivered after
//!   teardown are ignored.
//!
//! ## Re-render triggers
//!
//! | component        | attributes                                  | events                                   |
//! |------------------|---------------------------------------------|------------------------------------------|
//! | `AppHeader`      | `theme`                                     |                                          |
//! | `AppFooter`      |                                             |                                          |
//! | `NoteCreator`    | `max-title-length`, `max-body-length`       |                                          |
//! | `NoteCollection` | `filter`                                    | note-created, toggle-archive, delete-note |
//! | `NoteItem`       | `id`, `title`, `body`, `created-at`, `archived` |                                      |
//!
//! The filter toolbar is not a component: it sits outside and writes the collection's `filter`
//! attribute.

use crate::attributes::Attributes;
use crate::error::Result;
use crate::events::{AppEvent, EventKind};
use crate::store::NoteStore;

pub mod chrome;
pub mod note_collection;
pub mod note_creator;
pub mod note_item;
pub mod toolbar;

/// Something that causes a component to re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Attribute(&'static str),
    Event(EventKind),
}

pub trait Component {
    fn name(&self) -> &'static str;

    /// The defined re-render trigger list.
    fn triggers(&self) -> &'static [Trigger];

    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Mount and render for the first time.
    fn initialize(&mut self, store: &dyn NoteStore) -> Result<()>;

    /// An observed attribute changed value. Returns true when the component re-rendered.
    fn attribute_changed(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
        store: &dyn NoteStore,
    ) -> Result<bool>;

    /// An event from the trigger list arrived. Returns true when the component re-rendered.
    fn handle_event(&mut self, _event: &AppEvent, _store: &mut dyn NoteStore) -> Result<bool> {
        Ok(false)
    }

    /// The Escape key was pressed anywhere. Returns true when an overlay closed.
    fn escape_pressed(&mut self) -> bool {
        false
    }

    fn teardown(&mut self);

    /// Number of full renders so far.
    fn renders(&self) -> usize;

    fn observes(&self, attribute: &str) -> bool {
        self.triggers()
            .iter()
            .any(|t| matches!(t, Trigger::Attribute(name) if *name == attribute))
    }

    fn reacts_to(&self, kind: EventKind) -> bool {
        self.triggers()
            .iter()
            .any(|t| matches!(t, Trigger::Event(k) if *k == kind))
    }

    /// Sets (`Some`) or removes (`None`) an attribute.
    fn set_attribute(
        &mut self,
        name: &str,
        value: Option<&str>,
        store: &dyn NoteStore,
    ) -> Result<bool> {
        let old = self.attributes_mut().set(name, value);
        if !self.observes(name) || old.as_deref() == value {
            return Ok(false);
        }
        self.attribute_changed(name, old.as_deref(), value, store)
    }
}
