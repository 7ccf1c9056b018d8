use crate::commands::CmdResult;
use crate::display::index_workspace;
use crate::error::Result;
use crate::workspace::Workspace;

/// Produces the rendered tree: folders (with their members) first, then
/// root tabs, each entry carrying its display index.
pub fn run(ws: &Workspace) -> Result<CmdResult> {
    Ok(CmdResult::default().with_entries(index_workspace(ws)))
}
