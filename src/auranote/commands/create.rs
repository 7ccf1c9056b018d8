use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Tab;
use crate::store::SnapshotStore;
use crate::workspace::Workspace;

/// Creates a tab at the root level and makes it active. Without a title
/// the lowest unused "Note N" slot is taken.
pub fn run<S: SnapshotStore>(
    ws: &mut Workspace,
    store: &mut S,
    title: Option<String>,
) -> Result<CmdResult> {
    let title = match title {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => ws.next_note_title(),
    };

    let tab = Tab::new(title, String::new());
    let id = tab.id;
    ws.tabs.push(tab.clone());
    ws.set_active(Some(id));
    ws.save(store)?;

    let mut result = CmdResult::default();
    result.affected_tabs.push(tab.clone());
    result.add_message(CmdMessage::success(format!("Tab created: {}", tab.title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_default_titles_in_order() {
        let mut ws = Workspace::new();
        let mut store = InMemoryStore::new();

        for expected in ["Note 1", "Note 2", "Note 3"] {
            let result = run(&mut ws, &mut store, None).unwrap();
            assert_eq!(result.affected_tabs[0].title, expected);
        }
    }

    #[test]
    fn reuses_freed_default_slot() {
        let mut ws = Workspace::new();
        let mut store = InMemoryStore::new();
        run(&mut ws, &mut store, None).unwrap();
        run(&mut ws, &mut store, None).unwrap();
        run(&mut ws, &mut store, None).unwrap();

        // Remove "Note 2"; the next untitled tab takes the freed slot
        let gone = ws
            .tabs
            .iter()
            .find(|t| t.title == "Note 2")
            .map(|t| t.id)
            .unwrap();
        ws.remove_tab(gone);

        let result = run(&mut ws, &mut store, None).unwrap();
        assert_eq!(result.affected_tabs[0].title, "Note 2");
    }

    #[test]
    fn renamed_tabs_free_their_slot() {
        let mut ws = Workspace::new();
        let mut store = InMemoryStore::new();
        run(&mut ws, &mut store, None).unwrap();
        ws.tabs[0].title = "Shopping".to_string();

        let result = run(&mut ws, &mut store, None).unwrap();
        assert_eq!(result.affected_tabs[0].title, "Note 1");
    }

    #[test]
    fn explicit_title_is_trimmed() {
        let mut ws = Workspace::new();
        let mut store = InMemoryStore::new();
        let result = run(&mut ws, &mut store, Some("  Groceries  ".into())).unwrap();
        assert_eq!(result.affected_tabs[0].title, "Groceries");
    }

    #[test]
    fn blank_title_falls_back_to_default() {
        let mut ws = Workspace::new();
        let mut store = InMemoryStore::new();
        let result = run(&mut ws, &mut store, Some("   ".into())).unwrap();
        assert_eq!(result.affected_tabs[0].title, "Note 1");
    }

    #[test]
    fn new_tab_becomes_active_and_persists() {
        let mut ws = Workspace::new();
        let mut store = InMemoryStore::new();
        run(&mut ws, &mut store, None).unwrap();

        assert_eq!(ws.active_tab().unwrap().title, "Note 1");

        let loaded = Workspace::load(&mut store).unwrap();
        assert_eq!(loaded.tabs.len(), 1);
    }

    #[test]
    fn new_tab_lands_at_root() {
        let mut ws = Workspace::new();
        let mut store = InMemoryStore::new();
        run(&mut ws, &mut store, None).unwrap();
        assert_eq!(ws.tabs[0].folder_id, None);
    }
}
