use super::SnapshotStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Folder, Tab};
    use crate::workspace::Workspace;

    /// Builder for a populated workspace plus its backing store.
    pub struct WorkspaceFixture {
        pub workspace: Workspace,
        pub store: InMemoryStore,
    }

    impl Default for WorkspaceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WorkspaceFixture {
        pub fn new() -> Self {
            Self {
                workspace: Workspace::new(),
                store: InMemoryStore::new(),
            }
        }

        /// Appends `count` root tabs titled "Note 1".."Note count".
        pub fn with_tabs(mut self, count: usize) -> Self {
            for i in 0..count {
                let tab = Tab::new(format!("Note {}", i + 1), String::new());
                self.workspace.tabs.push(tab);
            }
            self.refresh_active();
            self
        }

        /// Appends a folder containing `members` tabs titled
        /// "<title> 1".."<title> members".
        pub fn with_folder(mut self, title: &str, members: usize) -> Self {
            let folder = Folder::new(title.to_string());
            let folder_id = folder.id;
            self.workspace.folders.push(folder);
            for i in 0..members {
                let mut tab = Tab::new(format!("{} {}", title, i + 1), String::new());
                tab.folder_id = Some(folder_id);
                self.workspace.tabs.push(tab);
            }
            self.refresh_active();
            self
        }

        /// Writes the current workspace into the store.
        pub fn persisted(mut self) -> Self {
            self.workspace.save(&mut self.store).unwrap();
            self
        }

        fn refresh_active(&mut self) {
            if self.workspace.active_id().is_none() {
                let first = self.workspace.tabs.first().map(|t| t.id);
                self.workspace.set_active(first);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let mut store = InMemoryStore::new();
        store.set("tabs", "[1,2]").unwrap();
        assert_eq!(store.get("tabs").unwrap().as_deref(), Some("[1,2]"));
        store.remove("tabs").unwrap();
        assert_eq!(store.get("tabs").unwrap(), None);
    }
}
