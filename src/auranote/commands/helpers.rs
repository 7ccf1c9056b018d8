use crate::display::{index_workspace, DisplayRef, TreeItem};
use crate::error::{NoteError, Result};
use crate::model::{FolderId, TabId};
use crate::workspace::Workspace;

/// Resolves a display index to a tab id.
pub fn resolve_tab(ws: &Workspace, index: DisplayRef) -> Result<TabId> {
    match index {
        DisplayRef::Tab(_) => index_workspace(ws)
            .into_iter()
            .find(|e| e.index == index)
            .and_then(|e| match e.item {
                TreeItem::Tab { tab, .. } => Some(tab.id),
                _ => None,
            })
            .ok_or_else(|| NoteError::Api(format!("Index {} not found", index))),
        DisplayRef::Folder(_) => Err(NoteError::Api(format!(
            "Index {} names a folder, expected a tab",
            index
        ))),
    }
}

/// Resolves a display index to a folder id.
pub fn resolve_folder(ws: &Workspace, index: DisplayRef) -> Result<FolderId> {
    match index {
        DisplayRef::Folder(n) => n
            .checked_sub(1)
            .and_then(|i| ws.folders.get(i))
            .map(|f| f.id)
            .ok_or_else(|| NoteError::Api(format!("Index {} not found", index))),
        DisplayRef::Tab(_) => Err(NoteError::Api(format!(
            "Index {} names a tab, expected a folder",
            index
        ))),
    }
}
