use crate::model::FilterMode;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToolbarButton {
    pub label: &'static str,
    pub mode: FilterMode,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToolbarView {
    pub buttons: Vec<ToolbarButton>,
}

/// The Semua / Aktif / Arsip button row above the list.
#[derive(Debug, Default)]
pub struct FilterToolbar {
    active: FilterMode,
}

impl FilterToolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> FilterMode {
        self.active
    }

    /// Marks `mode` active and returns the collection's new `filter` attribute value.
    /// `all` removes the attribute.
    pub fn select(&mut self, mode: FilterMode) -> Option<&'static str> {
        self.active = mode;
        match mode {
            FilterMode::All => None,
            other => Some(other.as_str()),
        }
    }

    pub fn view(&self) -> ToolbarView {
        let buttons = FilterMode::all()
            .iter()
            .map(|&mode| ToolbarButton {
                label: label(mode),
                mode,
                active: mode == self.active,
            })
            .collect();
        ToolbarView { buttons }
    }
}

fn label(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::All => "Semua",
        FilterMode::Active => "Aktif",
        FilterMode::Archived => "Arsip",
    }
}
