//! # Catatan Shell
//!
//! The binary is intentionally thin: the shell lives in `cli/`, and this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (src/catatan/cli/)                                   │
//! │  - clap parsing of flags and of each input line (setup.rs)  │
//! │  - The read/dispatch/redraw loop (commands.rs)              │
//! │  - Board rendering via minijinja templates (render.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (src/catatan/api.rs)                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is tested end to end in `tests/` by piping scripts into the binary.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
