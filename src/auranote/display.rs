//! # Display Indexing
//!
//! Maps the workspace onto the rendered order and assigns the short,
//! stable indexes users type in CLI commands: folders get `f1`, `f2`, …
//! in sequence order; tabs get `1`, `2`, … in rendered order — each
//! folder's members first (directly under their folder), then the root
//! tabs.
//!
//! Collapsed folders keep their members' indexes: collapse affects what a
//! listing *shows*, never what an index *means*, so `auranote view 3`
//! addresses the same tab whether or not its folder is open.

use crate::model::{Folder, Tab};
use crate::workspace::Workspace;

/// A user-facing index for a tab or folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayRef {
    Tab(usize),
    Folder(usize),
}

impl std::fmt::Display for DisplayRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayRef::Tab(i) => write!(f, "{}", i),
            DisplayRef::Folder(i) => write!(f, "f{}", i),
        }
    }
}

impl std::str::FromStr for DisplayRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('f') {
            if let Ok(n) = rest.parse() {
                return Ok(DisplayRef::Folder(n));
            }
        } else if let Ok(n) = s.parse() {
            return Ok(DisplayRef::Tab(n));
        }
        Err(format!("Invalid index format: {}", s))
    }
}

#[derive(Debug, Clone)]
pub enum TreeItem {
    Folder { folder: Folder, members: usize },
    Tab { tab: Tab, nested: bool },
}

/// One row of the rendered tree.
#[derive(Debug, Clone)]
pub struct TreeEntry {
    pub index: DisplayRef,
    pub item: TreeItem,
}

/// Assigns display indexes over the rendered order: each folder followed
/// by its member tabs, then the root tabs. Tab numbering is global and
/// continuous across containers.
pub fn index_workspace(ws: &Workspace) -> Vec<TreeEntry> {
    let mut entries = Vec::new();
    let mut tab_idx = 1;

    for (folder_pos, folder) in ws.folders.iter().enumerate() {
        let members: Vec<&Tab> = ws.tabs_in(folder.id).collect();
        entries.push(TreeEntry {
            index: DisplayRef::Folder(folder_pos + 1),
            item: TreeItem::Folder {
                folder: folder.clone(),
                members: members.len(),
            },
        });
        for tab in members {
            entries.push(TreeEntry {
                index: DisplayRef::Tab(tab_idx),
                item: TreeItem::Tab {
                    tab: tab.clone(),
                    nested: true,
                },
            });
            tab_idx += 1;
        }
    }

    for tab in ws.root_tabs() {
        entries.push(TreeEntry {
            index: DisplayRef::Tab(tab_idx),
            item: TreeItem::Tab {
                tab: tab.clone(),
                nested: false,
            },
        });
        tab_idx += 1;
    }

    entries
}
