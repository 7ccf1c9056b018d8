//! # The Document Model
//!
//! [`Workspace`] exclusively owns the two ordered sequences — tabs and
//! folders — that everything else operates on. Ordering is insertion
//! order; drag-reordering splices entries to new positions rather than
//! assigning explicit rank numbers. The active-tab pointer is transient:
//! it is never persisted, and a fresh load recomputes it as the first tab
//! in sequence.
//!
//! ## Persistence
//!
//! `save` writes each sequence as a single JSON blob under its own store
//! key; `load` reads them back. A malformed blob is not an error the user
//! ever sees: the corrupt value is discarded, the key removed from the
//! store, and the sequence reset to empty. After `save` returns, a `load`
//! in this or any fresh process observes the identical sequences.

use crate::error::Result;
use crate::model::{Folder, FolderId, Tab, TabId};
use crate::store::{SnapshotStore, FOLDERS_KEY, TABS_KEY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Default, Clone)]
pub struct Workspace {
    pub tabs: Vec<Tab>,
    pub folders: Vec<Folder>,
    active: Option<TabId>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads both sequences from the store. Malformed or missing snapshots
    /// reset to empty sequences; a malformed snapshot is also cleared from
    /// the store so the next save starts clean. The active pointer is
    /// recomputed as the first tab in sequence.
    pub fn load<S: SnapshotStore>(store: &mut S) -> Result<Self> {
        let tabs: Vec<Tab> = read_sequence(store, TABS_KEY)?;
        let folders: Vec<Folder> = read_sequence(store, FOLDERS_KEY)?;

        let mut ws = Self {
            tabs,
            folders,
            active: None,
        };
        ws.clear_dangling_folder_refs();
        ws.active = ws.tabs.first().map(|t| t.id);
        Ok(ws)
    }

    /// Persists both sequences, one blob per key.
    pub fn save<S: SnapshotStore>(&self, store: &mut S) -> Result<()> {
        write_sequence(store, TABS_KEY, &self.tabs)?;
        write_sequence(store, FOLDERS_KEY, &self.folders)?;
        Ok(())
    }

    // --- Active tab ---

    pub fn active_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|id| self.tab(id))
    }

    pub fn set_active(&mut self, id: Option<TabId>) {
        self.active = id;
    }

    // --- Lookups ---

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn tab_position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn folder_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|f| f.id == id)
    }

    pub fn folder_position(&self, id: FolderId) -> Option<usize> {
        self.folders.iter().position(|f| f.id == id)
    }

    /// Tabs at the root level, in sequence order.
    pub fn root_tabs(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter().filter(|t| t.folder_id.is_none())
    }

    /// Member tabs of a folder, in sequence order.
    pub fn tabs_in(&self, folder_id: FolderId) -> impl Iterator<Item = &Tab> + '_ {
        self.tabs
            .iter()
            .filter(move |t| t.folder_id == Some(folder_id))
    }

    /// Splices a tab out of the sequence, returning it.
    pub fn remove_tab(&mut self, id: TabId) -> Option<Tab> {
        let pos = self.tab_position(id)?;
        Some(self.tabs.remove(pos))
    }

    // --- Default titles ---

    /// The next unused "Note N" title, reusing the smallest free N.
    pub fn next_note_title(&self) -> String {
        smallest_unused("Note", self.tabs.iter().map(|t| t.title.as_str()))
    }

    /// The next unused "Folder N" title, scoped to folder titles only.
    pub fn next_folder_title(&self) -> String {
        smallest_unused("Folder", self.folders.iter().map(|f| f.title.as_str()))
    }

    /// Resets any `folder_id` that no longer names a live folder. Legacy
    /// snapshots can contain dangling references after a folder deletion;
    /// in-process operations never produce them.
    fn clear_dangling_folder_refs(&mut self) {
        for tab in &mut self.tabs {
            if let Some(fid) = tab.folder_id {
                if !self.folders.iter().any(|f| f.id == fid) {
                    warn!(tab = %tab.id, folder = %fid, "clearing dangling folder reference");
                    tab.folder_id = None;
                }
            }
        }
    }
}

fn read_sequence<S: SnapshotStore, T: DeserializeOwned>(
    store: &mut S,
    key: &str,
) -> Result<Vec<T>> {
    let Some(blob) = store.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&blob) {
        Ok(seq) => Ok(seq),
        Err(e) => {
            warn!(key, error = %e, "discarding malformed snapshot");
            store.remove(key)?;
            Ok(Vec::new())
        }
    }
}

fn write_sequence<S: SnapshotStore, T: Serialize>(
    store: &mut S,
    key: &str,
    seq: &[T],
) -> Result<()> {
    let blob = serde_json::to_string(seq)?;
    store.set(key, &blob)
}

/// Finds the smallest positive N such that "<prefix> N" is not among the
/// given titles.
fn smallest_unused<'a>(prefix: &str, titles: impl Iterator<Item = &'a str>) -> String {
    let used: std::collections::HashSet<u64> = titles
        .filter_map(|t| t.strip_prefix(prefix))
        .filter_map(|rest| rest.strip_prefix(' '))
        .filter_map(|n| n.parse().ok())
        .collect();

    let mut n = 1;
    while used.contains(&n) {
        n += 1;
    }
    format!("{} {}", prefix, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::TABS_KEY;

    fn workspace_with_titles(titles: &[&str]) -> Workspace {
        let mut ws = Workspace::new();
        for t in titles {
            ws.tabs.push(Tab::new(t.to_string(), String::new()));
        }
        ws
    }

    #[test]
    fn save_then_load_reproduces_sequences() {
        let mut store = InMemoryStore::new();
        let mut ws = workspace_with_titles(&["A", "B"]);
        let folder = Folder::new("Work".into());
        let folder_id = folder.id;
        ws.folders.push(folder);
        ws.tabs[1].folder_id = Some(folder_id);
        ws.tabs[1].content = "# B\n\nbody".into();

        ws.save(&mut store).unwrap();
        let loaded = Workspace::load(&mut store).unwrap();

        assert_eq!(loaded.tabs, ws.tabs);
        assert_eq!(loaded.folders, ws.folders);
    }

    #[test]
    fn load_recomputes_active_as_first_tab() {
        let mut store = InMemoryStore::new();
        let mut ws = workspace_with_titles(&["First", "Second"]);
        ws.set_active(Some(ws.tabs[1].id));
        ws.save(&mut store).unwrap();

        let loaded = Workspace::load(&mut store).unwrap();
        assert_eq!(loaded.active_id(), Some(loaded.tabs[0].id));
        assert_eq!(loaded.active_tab().unwrap().title, "First");
    }

    #[test]
    fn load_empty_store_gives_empty_workspace() {
        let mut store = InMemoryStore::new();
        let ws = Workspace::load(&mut store).unwrap();
        assert!(ws.tabs.is_empty());
        assert!(ws.folders.is_empty());
        assert_eq!(ws.active_id(), None);
    }

    #[test]
    fn malformed_snapshot_resets_and_clears_key() {
        let mut store = InMemoryStore::new();
        store.set(TABS_KEY, "{not json").unwrap();

        let ws = Workspace::load(&mut store).unwrap();
        assert!(ws.tabs.is_empty());
        // The corrupt value is gone, not left to fail again
        assert_eq!(store.get(TABS_KEY).unwrap(), None);
    }

    #[test]
    fn dangling_folder_refs_are_cleared_on_load() {
        let mut store = InMemoryStore::new();
        let mut ws = workspace_with_titles(&["Orphan"]);
        ws.tabs[0].folder_id = Some(FolderId::new());
        ws.save(&mut store).unwrap();

        let loaded = Workspace::load(&mut store).unwrap();
        assert_eq!(loaded.tabs[0].folder_id, None);
    }

    #[test]
    fn next_note_title_counts_from_one() {
        let ws = Workspace::new();
        assert_eq!(ws.next_note_title(), "Note 1");
    }

    #[test]
    fn next_note_title_reuses_lowest_free_slot() {
        // "Note 2" was deleted (or renamed away): the slot is free again
        let ws = workspace_with_titles(&["Note 1", "Note 3"]);
        assert_eq!(ws.next_note_title(), "Note 2");
    }

    #[test]
    fn next_note_title_ignores_near_misses() {
        let ws = workspace_with_titles(&["Note1", "Note x", "Note 1b"]);
        assert_eq!(ws.next_note_title(), "Note 1");
    }

    #[test]
    fn folder_titles_scoped_separately() {
        let mut ws = workspace_with_titles(&["Note 1", "Folder 1"]);
        ws.folders.push(Folder::new("Folder 2".into()));
        // A tab named "Folder 1" does not block the folder namespace
        assert_eq!(ws.next_folder_title(), "Folder 1");
        assert_eq!(ws.next_note_title(), "Note 2");
    }

    #[test]
    fn container_iterators_respect_sequence_order() {
        let mut ws = workspace_with_titles(&["r1", "m1", "r2", "m2"]);
        let folder = Folder::new("F".into());
        let fid = folder.id;
        ws.folders.push(folder);
        ws.tabs[1].folder_id = Some(fid);
        ws.tabs[3].folder_id = Some(fid);

        let roots: Vec<_> = ws.root_tabs().map(|t| t.title.as_str()).collect();
        let members: Vec<_> = ws.tabs_in(fid).map(|t| t.title.as_str()).collect();
        assert_eq!(roots, ["r1", "r2"]);
        assert_eq!(members, ["m1", "m2"]);
    }
}
