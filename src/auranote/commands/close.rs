use crate::commands::{create, CmdMessage, CmdResult};
use crate::error::{NoteError, Result};
use crate::model::TabId;
use crate::store::SnapshotStore;
use crate::workspace::Workspace;

/// Removes a tab from the sequence. When the closed tab was active the
/// sequence's new first element takes over; when nothing remains a default
/// tab is created immediately — the workspace never holds zero tabs while
/// live.
pub fn run<S: SnapshotStore>(ws: &mut Workspace, store: &mut S, id: TabId) -> Result<CmdResult> {
    let was_active = ws.active_id() == Some(id);
    let removed = ws.remove_tab(id).ok_or(NoteError::TabNotFound(id))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Tab closed: {}", removed.title)));
    result.affected_tabs.push(removed);

    if ws.tabs.is_empty() {
        let created = create::run(ws, store, None)?;
        result.messages.extend(created.messages);
        return Ok(result);
    }

    if was_active {
        ws.set_active(ws.tabs.first().map(|t| t.id));
    }
    ws.save(store)?;
    Ok(result)
}
