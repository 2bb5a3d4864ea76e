use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum trimmed title length accepted by the creator form.
pub const TITLE_MIN_CHARS: usize = 3;
/// Minimum trimmed body length accepted by the creator form.
pub const BODY_MIN_CHARS: usize = 5;
pub const DEFAULT_MAX_TITLE_CHARS: usize = 50;
pub const DEFAULT_MAX_BODY_CHARS: usize = 1000;

/// Opaque note identifier, unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Time-derived id in the `note-<unix millis>` form.
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("note-{}", millis))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    // Kept as the string it was created with; items parse it for display.
    pub created_at: String,
    #[serde(default)]
    pub archived: bool,
}

impl Note {
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            created_at: iso_timestamp(created_at),
            archived: false,
        }
    }
}

/// Formats a timestamp the way note records store it: `2026-10-17T08:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Archived,
}

impl FilterMode {
    pub fn all() -> &'static [FilterMode] {
        &[FilterMode::All, FilterMode::Active, FilterMode::Archived]
    }

    /// Reads a `filter` attribute value. Missing or unknown values mean `All`.
    pub fn from_attribute(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or(FilterMode::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Archived => "archived",
        }
    }

    pub fn admits(&self, note: &Note) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !note.archived,
            FilterMode::Archived => note.archived,
        }
    }

    /// Text used in the collection info line.
    pub fn description(&self) -> &'static str {
        match self {
            FilterMode::All => "semua catatan",
            FilterMode::Active => "catatan aktif",
            FilterMode::Archived => "catatan terarsip",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            FilterMode::All => "Tidak ada catatan yang ditemukan.",
            FilterMode::Active => "Tidak ada catatan aktif yang ditemukan.",
            FilterMode::Archived => "Tidak ada catatan terarsip yang ditemukan.",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "archived" => Ok(FilterMode::Archived),
            other => Err(format!("unknown filter: {}", other)),
        }
    }
}
