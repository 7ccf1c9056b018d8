use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Tab;
use crate::shell::ImportedNote;
use crate::store::SnapshotStore;
use crate::workspace::Workspace;

/// Synthesizes a tab from an imported markdown file: the file's base name
/// becomes the title, the content lands verbatim. Imported tabs join the
/// root level and do not steal the active slot.
pub fn run<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    note: ImportedNote,
) -> Result<CmdResult> {
    let tab = Tab::new(note.name, note.content);
    ws.tabs.push(tab.clone());
    ws.save(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Imported: {}", tab.title)));
    result.affected_tabs.push(tab);
    Ok(result)
}
