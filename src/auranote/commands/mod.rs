use crate::display::TreeEntry;
use crate::model::{FolderId, Tab, TabId};
use std::path::PathBuf;

pub mod close;
pub mod create;
pub mod edit;
pub mod export;
pub mod folders;
pub mod helpers;
pub mod import;
pub mod list;
pub mod move_tab;
pub mod rename;
pub mod reorder;
pub mod switch;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_tabs: Vec<Tab>,
    pub entries: Vec<TreeEntry>,
    pub exported_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_tabs(mut self, tabs: Vec<Tab>) -> Self {
        self.affected_tabs = tabs;
        self
    }

    pub fn with_entries(mut self, entries: Vec<TreeEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_exported_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.exported_paths = paths;
        self
    }
}

/// The caller's choice when deleting a folder that still has members.
/// There is no silent default — the UI layer asks, then passes the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Delete the folder's member tabs along with it.
    Cascade,
    /// Keep the member tabs, re-homed to the root level.
    Orphan,
}

/// Target position for a tab drag-reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPosition {
    /// Insert directly before the given tab (adopting its container).
    Before(TabId),
    /// Append at the end of a container: a folder, or the root when `None`.
    EndOf(Option<FolderId>),
}

/// Target position for a folder drag-reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderPosition {
    Before(FolderId),
    End,
}

/// Direction for cycling through the tab sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}
