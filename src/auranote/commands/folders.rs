use crate::commands::{create as create_tab, CmdMessage, CmdResult, Disposition};
use crate::error::{NoteError, Result};
use crate::model::{Folder, FolderId};
use crate::store::SnapshotStore;
use crate::workspace::Workspace;

/// Creates a folder. Without a name the lowest unused "Folder N" slot is
/// taken. Folders are never auto-selected.
pub fn create<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    name: Option<String>,
) -> Result<CmdResult> {
    let title = match name {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => ws.next_folder_title(),
    };

    let folder = Folder::new(title.clone());
    ws.folders.push(folder);
    ws.save(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Folder created: {}", title)));
    Ok(result)
}

/// Deletes a folder. The caller decides the fate of its members:
/// `Cascade` removes them with the folder, `Orphan` re-homes them to the
/// root. The result reports which action was taken.
pub fn delete<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    id: FolderId,
    disposition: Disposition,
) -> Result<CmdResult> {
    let pos = ws
        .folder_position(id)
        .ok_or(NoteError::FolderNotFound(id))?;
    let folder = ws.folders.remove(pos);

    let mut result = CmdResult::default();
    match disposition {
        Disposition::Cascade => {
            let mut removed = Vec::new();
            ws.tabs.retain(|t| {
                if t.folder_id == Some(id) {
                    removed.push(t.clone());
                    false
                } else {
                    true
                }
            });
            result.add_message(CmdMessage::success(format!(
                "Folder deleted: {} ({} notes removed)",
                folder.title,
                removed.len()
            )));
            result.affected_tabs = removed;
        }
        Disposition::Orphan => {
            let mut orphaned = Vec::new();
            for tab in ws.tabs.iter_mut().filter(|t| t.folder_id == Some(id)) {
                tab.folder_id = None;
                orphaned.push(tab.clone());
            }
            result.add_message(CmdMessage::success(format!(
                "Folder deleted: {} ({} notes moved to root)",
                folder.title,
                orphaned.len()
            )));
            result.affected_tabs = orphaned;
        }
    }

    // Cascade may have taken the active tab — or every tab — with it
    if let Some(active) = ws.active_id() {
        if ws.tab(active).is_none() {
            ws.set_active(ws.tabs.first().map(|t| t.id));
        }
    }
    if ws.tabs.is_empty() {
        let created = create_tab::run(ws, store, None)?;
        result.messages.extend(created.messages);
        return Ok(result);
    }

    ws.save(store)?;
    Ok(result)
}

/// Flips a folder's collapsed flag. Rendering state only, but persisted.
pub fn toggle_collapsed<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    id: FolderId,
) -> Result<CmdResult> {
    let folder = ws.folder_mut(id).ok_or(NoteError::FolderNotFound(id))?;
    folder.collapsed = !folder.collapsed;
    let (title, collapsed) = (folder.title.clone(), folder.collapsed);
    ws.save(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{}: {}",
        if collapsed { "Collapsed" } else { "Expanded" },
        title
    )));
    Ok(result)
}
