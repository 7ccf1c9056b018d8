use crate::commands::{CmdResult, Direction};
use crate::error::{NoteError, Result};
use crate::model::TabId;
use crate::workspace::Workspace;

/// Makes a tab active. The active pointer is transient, so nothing is
/// persisted; the facade pushes the tab's content into the editing
/// surface after this returns.
pub fn to(ws: &mut Workspace, id: TabId) -> Result<CmdResult> {
    let tab = ws.tab(id).ok_or(NoteError::TabNotFound(id))?.clone();
    ws.set_active(Some(id));

    let mut result = CmdResult::default();
    result.affected_tabs.push(tab);
    Ok(result)
}

/// Moves the active pointer through the tab sequence treated as circular.
/// A no-op when there are no tabs.
pub fn cycle(ws: &mut Workspace, direction: Direction) -> Result<CmdResult> {
    if ws.tabs.is_empty() {
        return Ok(CmdResult::default());
    }

    let len = ws.tabs.len() as isize;
    let current = ws
        .active_id()
        .and_then(|id| ws.tab_position(id))
        .unwrap_or(0) as isize;
    let step = match direction {
        Direction::Next => 1,
        Direction::Prev => -1,
    };
    let next = (current + step).rem_euclid(len) as usize;

    let tab = ws.tabs[next].clone();
    ws.set_active(Some(tab.id));

    let mut result = CmdResult::default();
    result.affected_tabs.push(tab);
    Ok(result)
}
