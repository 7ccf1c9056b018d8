use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NoteError, Result};
use crate::model::{FolderId, TabId};
use crate::store::SnapshotStore;
use crate::workspace::Workspace;

/// Re-homes a tab to a folder (or the root when `target` is `None`),
/// appending it after the target container's existing members. The
/// relative order of every other tab is untouched.
pub fn run<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    id: TabId,
    target: Option<FolderId>,
) -> Result<CmdResult> {
    if let Some(fid) = target {
        if ws.folder(fid).is_none() {
            return Err(NoteError::FolderNotFound(fid));
        }
    }

    let mut tab = ws.remove_tab(id).ok_or(NoteError::TabNotFound(id))?;
    tab.folder_id = target;
    // Last in sequence is last within its container, which is all the
    // rendered order cares about
    ws.tabs.push(tab.clone());
    ws.save(store)?;

    let destination = match target {
        Some(fid) => ws
            .folder(fid)
            .map(|f| f.title.clone())
            .unwrap_or_default(),
        None => "root".to_string(),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved {} to {}",
        tab.title, destination
    )));
    result.affected_tabs.push(tab);
    Ok(result)
}
