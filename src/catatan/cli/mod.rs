//! # Shell Behavior
//!
//! This is **one possible UI client** for catatan, not the application itself. It is the only
//! place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the library.
//!
//! ## One Line, One Click
//!
//! The shell reads one command per line from stdin. Each command stands for a single user
//! gesture on the board (typing into a field, clicking a button) and the whole board is redrawn
//! after it. Piped input works the same as typing, which is how the integration tests drive it.
//!
//! ## Overlays Capture Input
//!
//! While the "saved" popup or a delete dialog is open, only the overlay commands (`ok`,
//! `confirm`, `cancel`, `esc`, `outside`) reach it. Any other board command counts as a click
//! on the backdrop: the overlay closes and the command is dropped. `help` and `quit` are not
//! board gestures and always run.
//!
//! ## Module Structure
//!
//! - `commands`: the shell loop and per-command handlers that call the API
//! - `render`: board and message output
//! - `setup`: flag and line parsing via clap, grouped help
//! - `styles`: light and dark palettes
//! - `templates`: embedded board templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
