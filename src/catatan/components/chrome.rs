//! Header and footer.

use super::{Component, Trigger};
use crate::attributes::Attributes;
use crate::config::Theme;
use crate::error::Result;
use crate::store::NoteStore;
use serde::Serialize;
use tracing::debug;

pub const ATTR_THEME: &str = "theme";

const HEADER_TRIGGERS: &[Trigger] = &[Trigger::Attribute(ATTR_THEME)];

pub const APP_NAME: &str = "Aditya's NotesApp";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeaderView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub theme: Theme,
}

#[derive(Debug, Default)]
pub struct AppHeader {
    attrs: Attributes,
    theme: Theme,
    renders: usize,
}

impl AppHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> HeaderView {
        HeaderView {
            title: APP_NAME,
            subtitle: "Store ur best idea here!",
            theme: self.theme,
        }
    }

    fn render(&mut self) {
        self.theme = Theme::from_attribute(self.attrs.get(ATTR_THEME));
        self.renders += 1;
        debug!(theme = self.theme.as_str(), "header rendered");
    }
}

impl Component for AppHeader {
    fn name(&self) -> &'static str {
        "app-header"
    }

    fn triggers(&self) -> &'static [Trigger] {
        HEADER_TRIGGERS
    }

    fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    fn initialize(&mut self, _store: &dyn NoteStore) -> Result<()> {
        self.render();
        Ok(())
    }

    fn attribute_changed(
        &mut self,
        _name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
        _store: &dyn NoteStore,
    ) -> Result<bool> {
        if self.renders == 0 {
            return Ok(false);
        }
        self.render();
        Ok(true)
    }

    fn teardown(&mut self) {}

    fn renders(&self) -> usize {
        self.renders
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FooterView {
    pub text: String,
}

#[derive(Debug)]
pub struct AppFooter {
    attrs: Attributes,
    year: i32,
    renders: usize,
}

impl AppFooter {
    pub fn new(year: i32) -> Self {
        Self {
            attrs: Attributes::new(),
            year,
            renders: 0,
        }
    }

    pub fn view(&self) -> FooterView {
        FooterView {
            text: format!("© {} {} | Dibuat dengan ❤ untuk Dicoding", self.year, APP_NAME),
        }
    }
}

impl Component for AppFooter {
    fn name(&self) -> &'static str {
        "app-footer"
    }

    fn triggers(&self) -> &'static [Trigger] {
        &[]
    }

    fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    fn initialize(&mut self, _store: &dyn NoteStore) -> Result<()> {
        self.renders += 1;
        Ok(())
    }

    fn attribute_changed(
        &mut self,
        _name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
        _store: &dyn NoteStore,
    ) -> Result<bool> {
        Ok(false)
    }

    fn teardown(&mut self) {}

    fn renders(&self) -> usize {
        self.renders
    }
}
