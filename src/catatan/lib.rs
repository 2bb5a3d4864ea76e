//! # Catatan Architecture
//!
//! Catatan is a **UI-agnostic note board library**: create, filter, search, archive and delete
//! short notes held in session memory. The terminal shell shipped with it is one client of the
//! library, not the library itself.
//!
//! The hard part is keeping one in-memory note list consistent with several independently
//! rendered fragments (form, filter toolbar, search box, list, per-note actions). Every fragment
//! is a view model; they only meet through the store and the event channel.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (cli/, wired by main.rs)                             │
//! │  - Parses lines, renders views, handles terminal I/O        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Routes user actions to components                        │
//! │  - Pumps the event channel after every action               │
//! │  - Returns `Result<CmdResult>` and serializable views       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Components (components/)                                  │
//! │  - Creator, collection, items, header, footer, toolbar      │
//! │  - Attributes in, events out, views rendered from the store │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait, MemoryStore                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event Flow
//!
//! ```text
//!   user action ──► component mutates store or emits AppEvent
//!                        │
//!                        ▼
//!   CatatanApi drains EventQueue ──► components whose triggers name the event
//!                        │
//!                        ▼
//!              full re-render from the store
//! ```
//!
//! Everything happens synchronously inside one action: by the time an API method returns, the
//! store is mutated and every affected component has re-rendered.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the process. Note
//! timestamps and popup deadlines come from the injected [`clock`]. The one direct wall-clock
//! read is a note item's stand-in date when its `created-at` attribute is missing.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all actions
//! - [`components`]: the view models and their lifecycle trait
//! - [`events`]: child-to-parent event channel
//! - [`store`]: storage abstraction and the in-memory implementation
//! - [`model`]: note records, ids, filter modes
//! - [`attributes`]: per-component string attributes
//! - [`format`]: date display
//! - [`config`]: settings file
//! - [`seed`]: start-up note import
//! - [`clock`]: injectable time source
//! - [`error`]: error types
//! - `cli`: line parsing, templated rendering and the shell loop for the binary (not part of the
//!   lib API)

pub mod api;
pub mod attributes;
pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod model;
pub mod seed;
pub mod store;
