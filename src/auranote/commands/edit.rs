use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NoteError, Result};
use crate::model::heading_title;
use crate::store::SnapshotStore;
use crate::surface::normalize_markdown;
use crate::workspace::Workspace;

/// Applies an edit to the active tab: replace the content, derive the
/// title from a leading markdown heading when one is present, and
/// persist. A manual rename sticks until the heading text itself changes.
pub fn run<S: SnapshotStore>(ws: &mut Workspace, store: &mut S, content: &str) -> Result<CmdResult> {
    let id = ws
        .active_id()
        .ok_or_else(|| NoteError::Api("No active tab".to_string()))?;
    let tab = ws.tab_mut(id).ok_or(NoteError::TabNotFound(id))?;

    let previous = heading_title(&tab.content);
    tab.content = content.to_string();
    let mut retitled = None;
    if let Some(derived) = heading_title(content) {
        // Only a *changed* heading takes the title over: a manual rename
        // sticks while the heading text stays the same
        if previous.as_deref() != Some(derived.as_str()) && derived != tab.title {
            tab.title = derived.clone();
            retitled = Some(derived);
        }
    }
    tab.touch();
    let updated = tab.clone();
    ws.save(store)?;

    let mut result = CmdResult::default();
    if let Some(title) = retitled {
        result.add_message(CmdMessage::info(format!("Title updated: {}", title)));
    }
    result.affected_tabs.push(updated);
    Ok(result)
}

/// Reflows the active tab's markdown through the engine into its
/// canonical form, then applies it as a regular edit.
pub fn tidy<S: SnapshotStore>(ws: &mut Workspace, store: &mut S) -> Result<CmdResult> {
    let tab = ws
        .active_tab()
        .ok_or_else(|| NoteError::Api("No active tab".to_string()))?;
    let normalized = normalize_markdown(&tab.content)?;
    let mut result = run(ws, store, &normalized)?;
    result.add_message(CmdMessage::success("Markdown reformatted."));
    Ok(result)
}
