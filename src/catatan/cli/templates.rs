//! # Board Templates
//!
//! The board is drawn from stand-alone minijinja template files, embedded here with
//! `include_str!` so the binary stays self-contained.
//!
//! Conventions the templates follow:
//!
//!     1. Line breaks are explicit. Block tags use a leading `{%-` so they eat the newline of
//!        the line before them; content lines carry their own newline. Environment defaults
//!        are left alone (no trim_blocks).
//!
//!     2. One template per board fragment, composed with `{% include %}` from `board.tmp`.
//!        Included templates see the caller's variables (`item` inside the list loop).
//!
//!     3. Style choice is data. When a fragment's style depends on state (a disabled submit, the
//!        active filter, an archived badge) Rust passes the style name and the template applies
//!        it with `style(x.style)`.
//!
//!     4. Width math (centering, truncation) happens in Rust before the data reaches a template.

pub const BOARD_TEMPLATE: &str = include_str!("templates/board.tmp");

/// Every template, keyed by the name `{% include %}` uses.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("board.tmp", BOARD_TEMPLATE),
    ("header.tmp", include_str!("templates/header.tmp")),
    ("creator.tmp", include_str!("templates/creator.tmp")),
    ("toolbar.tmp", include_str!("templates/toolbar.tmp")),
    ("collection.tmp", include_str!("templates/collection.tmp")),
    ("item.tmp", include_str!("templates/item.tmp")),
    ("notification.tmp", include_str!("templates/notification.tmp")),
    ("dialog.tmp", include_str!("templates/dialog.tmp")),
];
