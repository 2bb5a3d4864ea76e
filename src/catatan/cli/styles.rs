//! Palettes for the board.
//!
//! Templates only use semantic style names (`note-title`, `archived`, `danger`, ...). A palette
//! maps those names to concrete `console` styles, one palette per header theme. Both palettes
//! define exactly the same names, so switching themes never changes what a template can say.
//!
//! Unknown names are not fatal: the text is rendered with a `(!?)` prefix so a typo in a
//! template shows up on screen instead of silently losing its style.

use catatan::config::Theme;
use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const APP_TITLE: &str = "app-title";
    pub const SECTION: &str = "section";
    pub const LABEL: &str = "label";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const BUTTON: &str = "button";
    pub const DISABLED: &str = "disabled";
    pub const FILTER_ACTIVE: &str = "filter-active";
    pub const FILTER_IDLE: &str = "filter-idle";
    pub const INDEX: &str = "index";
    pub const NOTE_TITLE: &str = "note-title";
    pub const TIME: &str = "time";
    pub const ACTIVE: &str = "active";
    pub const ARCHIVED: &str = "archived";
    pub const ACTION: &str = "action";
    pub const DANGER: &str = "danger";
    pub const ERROR: &str = "error";
    pub const SUCCESS: &str = "success";
}

const MISSING_INDICATOR: &str = "(!?)";

#[derive(Debug, Clone, Default)]
pub struct Palette {
    styles: HashMap<&'static str, Style>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Applies a named style, or returns the bare text when color is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_INDICATOR, text),
        }
    }
}

pub static LIGHT: Lazy<Palette> = Lazy::new(build_light_palette);
pub static DARK: Lazy<Palette> = Lazy::new(build_dark_palette);

pub fn palette_for(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &*LIGHT,
        Theme::Dark => &*DARK,
    }
}

fn build_light_palette() -> Palette {
    let regular = Style::new().black();
    let muted = Style::new().color256(243);
    let faint = Style::new().color256(249);
    let accent = Style::new().color256(25);

    Palette::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint.clone())
        .add(names::APP_TITLE, accent.clone().bold())
        .add(names::SECTION, regular.clone().bold())
        .add(names::LABEL, regular.clone())
        .add(names::PLACEHOLDER, faint.clone().italic())
        .add(names::BUTTON, Style::new().white().on_color256(25).bold())
        .add(names::DISABLED, faint)
        .add(names::FILTER_ACTIVE, Style::new().white().on_color256(25))
        .add(names::FILTER_IDLE, muted.clone())
        .add(names::INDEX, accent)
        .add(names::NOTE_TITLE, regular.bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::ACTIVE, Style::new().color256(28))
        .add(names::ARCHIVED, Style::new().color256(130))
        .add(names::ACTION, muted)
        .add(names::DANGER, Style::new().color256(160))
        .add(names::ERROR, Style::new().red().bold())
        .add(names::SUCCESS, Style::new().green().bold())
}

fn build_dark_palette() -> Palette {
    let regular = Style::new().white();
    let muted = Style::new().color256(250);
    let faint = Style::new().color256(242);
    let accent = Style::new().color256(117);

    Palette::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint.clone())
        .add(names::APP_TITLE, accent.clone().bold())
        .add(names::SECTION, regular.clone().bold())
        .add(names::LABEL, regular.clone())
        .add(names::PLACEHOLDER, faint.clone().italic())
        .add(names::BUTTON, Style::new().black().on_color256(117).bold())
        .add(names::DISABLED, faint)
        .add(names::FILTER_ACTIVE, Style::new().black().on_color256(117))
        .add(names::FILTER_IDLE, muted.clone())
        .add(names::INDEX, accent)
        .add(names::NOTE_TITLE, regular.bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::ACTIVE, Style::new().color256(114))
        .add(names::ARCHIVED, Style::new().color256(215))
        .add(names::ACTION, muted)
        .add(names::DANGER, Style::new().color256(210))
        .add(names::ERROR, Style::new().red().bold())
        .add(names::SUCCESS, Style::new().green().bold())
}
