//! # Domain Model: Tabs, Folders, and Title Derivation
//!
//! A [`Tab`] is one note — the unit of editable markdown content. A
//! [`Folder`] is a named, collapsible grouping of tabs, one level deep.
//! Both carry opaque UUID identifiers behind distinct newtypes so a tab id
//! can never be mistaken for a folder id.
//!
//! ## Snapshot Tolerance
//!
//! Persisted snapshots have no schema version. Older snapshots may lack
//! fields this model has since grown — `collapsed`, timestamps — so every
//! optional field deserializes permissively with a default, and unknown
//! fields are ignored.
//!
//! ## Title Derivation
//!
//! When the first non-blank line of a note is an ATX heading (one to six
//! `#` characters, whitespace, then text), the heading text doubles as the
//! tab title. [`heading_title`] implements that extraction; the controller
//! applies it on every content change, so a manually renamed tab keeps its
//! name until the heading text actually changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(Uuid);

impl FolderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FolderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// `None` means the tab sits at the root level.
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Tab {
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: TabId::new(),
            title,
            content,
            folder_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the tab as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub title: String,
    /// View state only: a collapsed folder hides its members in listings.
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Folder {
    pub fn new(title: String) -> Self {
        Self {
            id: FolderId::new(),
            title,
            collapsed: false,
            created_at: Utc::now(),
        }
    }
}

/// Extracts a title from the first non-blank line of `content` when that
/// line is an ATX heading: 1–6 `#` characters, at least one whitespace,
/// then non-empty text. Returns the trimmed heading text.
pub fn heading_title(content: &str) -> Option<String> {
    let line = content.lines().find(|l| !l.trim().is_empty())?;
    let line = line.trim_start();

    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    // '#' is a single byte, so slicing by count is safe
    let rest = &line[hashes..];
    if !rest.starts_with(|c: char| c == ' ' || c == '\t') {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}
