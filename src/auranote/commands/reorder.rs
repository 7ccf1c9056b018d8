use crate::commands::{CmdMessage, CmdResult, FolderPosition, TabPosition};
use crate::error::{NoteError, Result};
use crate::model::{FolderId, TabId};
use crate::store::SnapshotStore;
use crate::workspace::Workspace;

/// Drag-reorders a tab: splice out, splice in at the drop position. A
/// drop before a tab in another container re-homes the dragged tab to
/// that container; a drop at a container's end appends there.
pub fn tab<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    id: TabId,
    position: TabPosition,
) -> Result<CmdResult> {
    if let TabPosition::Before(target) = position {
        if target == id {
            return Ok(CmdResult::default());
        }
    }
    match position {
        TabPosition::Before(target) => {
            if ws.tab(target).is_none() {
                return Err(NoteError::TabNotFound(target));
            }
            let mut moved = ws.remove_tab(id).ok_or(NoteError::TabNotFound(id))?;
            // Recompute after the splice-out shifted positions; the target
            // is still present since it is not the moved tab
            let target_pos = ws
                .tab_position(target)
                .ok_or(NoteError::TabNotFound(target))?;
            moved.folder_id = ws.tabs[target_pos].folder_id;
            ws.tabs.insert(target_pos, moved);
        }
        TabPosition::EndOf(container) => {
            if let Some(fid) = container {
                if ws.folder(fid).is_none() {
                    return Err(NoteError::FolderNotFound(fid));
                }
            }
            let mut moved = ws.remove_tab(id).ok_or(NoteError::TabNotFound(id))?;
            moved.folder_id = container;
            ws.tabs.push(moved);
        }
    }
    ws.save(store)?;

    let mut result = CmdResult::default();
    let title = ws.tab(id).map(|t| t.title.clone()).unwrap_or_default();
    result.add_message(CmdMessage::success(format!("Reordered: {}", title)));
    Ok(result)
}

/// Drag-reorders a folder within the folder sequence.
pub fn folder<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    id: FolderId,
    position: FolderPosition,
) -> Result<CmdResult> {
    if let FolderPosition::Before(target) = position {
        if target == id {
            return Ok(CmdResult::default());
        }
    }
    let pos = ws
        .folder_position(id)
        .ok_or(NoteError::FolderNotFound(id))?;
    let moved = ws.folders.remove(pos);

    match position {
        FolderPosition::Before(target) => {
            let target_pos = match ws.folder_position(target) {
                Some(p) => p,
                None => {
                    // Put things back before reporting the bad target
                    ws.folders.insert(pos, moved);
                    return Err(NoteError::FolderNotFound(target));
                }
            };
            ws.folders.insert(target_pos, moved);
        }
        FolderPosition::End => ws.folders.push(moved),
    }
    ws.save(store)?;

    let mut result = CmdResult::default();
    let title = ws.folder(id).map(|f| f.title.clone()).unwrap_or_default();
    result.add_message(CmdMessage::success(format!("Reordered: {}", title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::WorkspaceFixture;

    fn root_titles(ws: &Workspace) -> Vec<String> {
        ws.root_tabs().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn reorder_before_within_container() {
        let fx = WorkspaceFixture::new().with_tabs(3);
        let mut ws = fx.workspace;
        let mut store = fx.store;
        let third = ws.tabs[2].id;
        let first = ws.tabs[0].id;

        tab(&mut ws, &mut store, third, TabPosition::Before(first)).unwrap();

        assert_eq!(root_titles(&ws), ["Note 3", "Note 1", "Note 2"]);
    }

    #[test]
    fn reorder_to_end_of_root() {
        let fx = WorkspaceFixture::new().with_tabs(3);
        let mut ws = fx.workspace;
        let mut store = fx.store;
        let first = ws.tabs[0].id;

        tab(&mut ws, &mut store, first, TabPosition::EndOf(None)).unwrap();

        assert_eq!(root_titles(&ws), ["Note 2", "Note 3", "Note 1"]);
    }

    #[test]
    fn drop_before_folder_member_re_homes_the_tab() {
        let fx = WorkspaceFixture::new().with_tabs(1).with_folder("Work", 2);
        let mut ws = fx.workspace;
        let mut store = fx.store;
        let fid = ws.folders[0].id;
        let root_tab = ws.tabs[0].id;
        let second_member = ws.tabs[2].id;

        tab(
            &mut ws,
            &mut store,
            root_tab,
            TabPosition::Before(second_member),
        )
        .unwrap();

        let members: Vec<_> = ws.tabs_in(fid).map(|t| t.title.as_str()).collect();
        assert_eq!(members, ["Work 1", "Note 1", "Work 2"]);
        assert_eq!(root_titles(&ws), Vec::<String>::new());
    }

    #[test]
    fn drop_at_folder_end_appends_there() {
        let fx = WorkspaceFixture::new().with_tabs(2).with_folder("Work", 1);
        let mut ws = fx.workspace;
        let mut store = fx.store;
        let fid = ws.folders[0].id;
        let first = ws.tabs[0].id;

        tab(&mut ws, &mut store, first, TabPosition::EndOf(Some(fid))).unwrap();

        let members: Vec<_> = ws.tabs_in(fid).map(|t| t.title.as_str()).collect();
        assert_eq!(members, ["Work 1", "Note 1"]);
    }

    #[test]
    fn reorder_onto_itself_is_a_noop() {
        let fx = WorkspaceFixture::new().with_tabs(2);
        let mut ws = fx.workspace;
        let mut store = fx.store;
        let first = ws.tabs[0].id;

        tab(&mut ws, &mut store, first, TabPosition::Before(first)).unwrap();

        assert_eq!(root_titles(&ws), ["Note 1", "Note 2"]);
    }

    #[test]
    fn reorder_folders() {
        let fx = WorkspaceFixture::new()
            .with_folder("Alpha", 0)
            .with_folder("Beta", 0)
            .with_folder("Gamma", 0);
        let mut ws = fx.workspace;
        let mut store = fx.store;
        let gamma = ws.folders[2].id;
        let alpha = ws.folders[0].id;

        folder(&mut ws, &mut store, gamma, FolderPosition::Before(alpha)).unwrap();

        let titles: Vec<_> = ws.folders.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["Gamma", "Alpha", "Beta"]);

        folder(&mut ws, &mut store, gamma, FolderPosition::End).unwrap();
        let titles: Vec<_> = ws.folders.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn bad_reorder_target_leaves_sequence_intact() {
        let fx = WorkspaceFixture::new()
            .with_folder("Alpha", 0)
            .with_folder("Beta", 0);
        let mut ws = fx.workspace;
        let mut store = fx.store;
        let alpha = ws.folders[0].id;

        let err = folder(
            &mut ws,
            &mut store,
            alpha,
            FolderPosition::Before(FolderId::new()),
        );

        assert!(err.is_err());
        let titles: Vec<_> = ws.folders.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Beta"]);
    }
}
