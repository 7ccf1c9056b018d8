use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NoteError, Result};
use crate::model::{FolderId, TabId};
use crate::store::SnapshotStore;
use crate::workspace::Workspace;

/// Renames a tab. An empty trimmed title is a no-op, mirroring the rename
/// field losing focus with nothing in it.
pub fn tab<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    id: TabId,
    new_title: &str,
) -> Result<CmdResult> {
    let trimmed = new_title.trim();
    let mut result = CmdResult::default();

    if trimmed.is_empty() {
        result.add_message(CmdMessage::info("Title unchanged."));
        return Ok(result);
    }

    let tab = ws.tab_mut(id).ok_or(NoteError::TabNotFound(id))?;
    tab.title = trimmed.to_string();
    tab.touch();
    let renamed = tab.clone();
    ws.save(store)?;

    result.add_message(CmdMessage::success(format!("Tab renamed: {}", renamed.title)));
    result.affected_tabs.push(renamed);
    Ok(result)
}

/// Renames a folder under the same empty-title no-op rule.
pub fn folder<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    id: FolderId,
    new_title: &str,
) -> Result<CmdResult> {
    let trimmed = new_title.trim();
    let mut result = CmdResult::default();

    if trimmed.is_empty() {
        result.add_message(CmdMessage::info("Name unchanged."));
        return Ok(result);
    }

    let folder = ws.folder_mut(id).ok_or(NoteError::FolderNotFound(id))?;
    folder.title = trimmed.to_string();
    let title = folder.title.clone();
    ws.save(store)?;

    result.add_message(CmdMessage::success(format!("Folder renamed: {}", title)));
    Ok(result)
}
