//! # API Facade
//!
//! [`NotebookApi`] is the single entry point for all operations. It owns
//! the three collaborators — the snapshot store, the workspace, and the
//! editor host — normalizes display indexes into ids, dispatches to the
//! command layer, and keeps the editing surface in sync with the active
//! tab.
//!
//! The facade is generic over [`SnapshotStore`]:
//! - Production: `NotebookApi<FileStore>`
//! - Testing: `NotebookApi<InMemoryStore>`
//!
//! ## Surface Mediation
//!
//! Every operation that can change the active tab (create, close, switch,
//! cycle, folder cascade) ends by pushing the new active content into the
//! editor host. Those pushes are programmatic: the host suppresses the
//! change notification they trigger, so persisted content is never
//! re-saved just because it was displayed.

use crate::commands::{self, CmdResult, Direction, Disposition, FolderPosition, TabPosition};
use crate::commands::helpers::{resolve_folder, resolve_tab};
use crate::display::DisplayRef;
use crate::error::Result;
use crate::model::Tab;
use crate::prefs::Preferences;
use crate::shell;
use crate::store::SnapshotStore;
use crate::surface::EditorHost;
use crate::workspace::Workspace;
use std::path::Path;

/// Drop target for a tab drag-reorder, in display-index terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderTarget {
    /// Drop directly before this tab (adopting its container).
    Before(DisplayRef),
    /// Drop at the end of the root level.
    EndOfRoot,
    /// Drop at the end of this folder.
    EndOfFolder(DisplayRef),
}

pub struct NotebookApi<S: SnapshotStore> {
    store: S,
    workspace: Workspace,
    editor: EditorHost,
}

impl<S: SnapshotStore> NotebookApi<S> {
    /// Loads the workspace and initializes the editing surface
    /// synchronously (falling back to plain text if the rich engine is
    /// unavailable).
    pub fn open(store: S) -> Result<Self> {
        Self::open_with_editor(store, EditorHost::initialize())
    }

    /// Loads the workspace with a caller-provided editor host — the entry
    /// point for embeddings whose surface initializes asynchronously.
    /// A workspace is never live with zero tabs: an empty (or reset)
    /// snapshot gets a default tab immediately.
    pub fn open_with_editor(mut store: S, editor: EditorHost) -> Result<Self> {
        let workspace = Workspace::load(&mut store)?;
        let mut api = Self {
            store,
            workspace,
            editor,
        };
        if api.workspace.tabs.is_empty() {
            commands::create::run(&mut api.workspace, &mut api.store, None)?;
        }
        api.sync_surface();
        Ok(api)
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn editor(&self) -> &EditorHost {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorHost {
        &mut self.editor
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.workspace.active_tab()
    }

    // --- Tab lifecycle ---

    pub fn create_tab(&mut self, title: Option<String>) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.workspace, &mut self.store, title)?;
        self.sync_surface();
        Ok(result)
    }

    pub fn close_tab(&mut self, index: DisplayRef) -> Result<CmdResult> {
        let id = resolve_tab(&self.workspace, index)?;
        let result = commands::close::run(&mut self.workspace, &mut self.store, id)?;
        self.sync_surface();
        Ok(result)
    }

    pub fn rename_tab(&mut self, index: DisplayRef, title: &str) -> Result<CmdResult> {
        let id = resolve_tab(&self.workspace, index)?;
        commands::rename::tab(&mut self.workspace, &mut self.store, id, title)
    }

    // --- Folders ---

    pub fn create_folder(&mut self, name: Option<String>) -> Result<CmdResult> {
        commands::folders::create(&mut self.workspace, &mut self.store, name)
    }

    pub fn rename_folder(&mut self, index: DisplayRef, title: &str) -> Result<CmdResult> {
        let id = resolve_folder(&self.workspace, index)?;
        commands::rename::folder(&mut self.workspace, &mut self.store, id, title)
    }

    pub fn delete_folder(
        &mut self,
        index: DisplayRef,
        disposition: Disposition,
    ) -> Result<CmdResult> {
        let id = resolve_folder(&self.workspace, index)?;
        let result =
            commands::folders::delete(&mut self.workspace, &mut self.store, id, disposition)?;
        self.sync_surface();
        Ok(result)
    }

    pub fn toggle_folder(&mut self, index: DisplayRef) -> Result<CmdResult> {
        let id = resolve_folder(&self.workspace, index)?;
        commands::folders::toggle_collapsed(&mut self.workspace, &mut self.store, id)
    }

    // --- Placement ---

    pub fn move_tab(&mut self, tab: DisplayRef, folder: Option<DisplayRef>) -> Result<CmdResult> {
        let id = resolve_tab(&self.workspace, tab)?;
        let target = match folder {
            Some(f) => Some(resolve_folder(&self.workspace, f)?),
            None => None,
        };
        commands::move_tab::run(&mut self.workspace, &mut self.store, id, target)
    }

    pub fn reorder_tab(&mut self, tab: DisplayRef, target: ReorderTarget) -> Result<CmdResult> {
        let id = resolve_tab(&self.workspace, tab)?;
        let position = match target {
            ReorderTarget::Before(before) => {
                TabPosition::Before(resolve_tab(&self.workspace, before)?)
            }
            ReorderTarget::EndOfRoot => TabPosition::EndOf(None),
            ReorderTarget::EndOfFolder(folder) => {
                TabPosition::EndOf(Some(resolve_folder(&self.workspace, folder)?))
            }
        };
        commands::reorder::tab(&mut self.workspace, &mut self.store, id, position)
    }

    pub fn reorder_folder(
        &mut self,
        folder: DisplayRef,
        before: Option<DisplayRef>,
    ) -> Result<CmdResult> {
        let id = resolve_folder(&self.workspace, folder)?;
        let position = match before {
            Some(b) => FolderPosition::Before(resolve_folder(&self.workspace, b)?),
            None => FolderPosition::End,
        };
        commands::reorder::folder(&mut self.workspace, &mut self.store, id, position)
    }

    // --- Active tab & surface ---

    pub fn switch_tab(&mut self, index: DisplayRef) -> Result<CmdResult> {
        let id = resolve_tab(&self.workspace, index)?;
        let result = commands::switch::to(&mut self.workspace, id)?;
        self.sync_surface();
        Ok(result)
    }

    pub fn cycle_tab(&mut self, direction: Direction) -> Result<CmdResult> {
        let result = commands::switch::cycle(&mut self.workspace, direction)?;
        self.sync_surface();
        Ok(result)
    }

    /// Entry point for the surface's change notifications. Echoes of
    /// programmatic pushes are swallowed by the host and save nothing;
    /// user edits flow into the active tab (title heuristic included).
    pub fn handle_surface_change(&mut self, markdown: &str) -> Result<Option<CmdResult>> {
        match self.editor.notify_edited(markdown) {
            Some(content) => {
                let result = commands::edit::run(&mut self.workspace, &mut self.store, &content)?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    /// Switches the surface into raw mode and returns the seeded text.
    pub fn begin_raw_edit(&mut self) -> String {
        self.editor.enter_raw().to_string()
    }

    /// Leaves raw mode: the edited text is pushed back into the rendered
    /// surface and persisted through the regular edit path.
    pub fn finish_raw_edit(&mut self, edited: &str) -> Result<CmdResult> {
        let content = self.editor.leave_raw(edited);
        commands::edit::run(&mut self.workspace, &mut self.store, &content)
    }

    /// Reformats the active tab's markdown into canonical form.
    pub fn tidy_active(&mut self) -> Result<CmdResult> {
        let result = commands::edit::tidy(&mut self.workspace, &mut self.store)?;
        self.sync_surface();
        Ok(result)
    }

    /// Display text for the active tab's rendered view.
    pub fn render_active(&self) -> String {
        self.editor.render()
    }

    // --- Import / export / listing ---

    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<CmdResult> {
        let note = shell::read_markdown_file(path)?;
        commands::import::run(&mut self.workspace, &mut self.store, note)
    }

    pub fn export_tab(&self, index: DisplayRef, dir: &Path) -> Result<CmdResult> {
        let id = resolve_tab(&self.workspace, index)?;
        commands::export::tab(&self.workspace, id, dir)
    }

    pub fn export_archive(&self, dir: &Path) -> Result<CmdResult> {
        commands::export::archive(&self.workspace, dir)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.workspace)
    }

    // --- Preferences ---

    pub fn preferences(&self) -> Result<Preferences> {
        Preferences::load(&self.store)
    }

    pub fn set_preference(&mut self, key: &str, value: &str) -> Result<CmdResult> {
        Preferences::set_value(&mut self.store, key, value)?;
        let mut result = CmdResult::default();
        result.add_message(commands::CmdMessage::success(format!("{} = {}", key, value)));
        Ok(result)
    }

    /// Pushes the active tab's content into the surface. The push is
    /// programmatic, so its change echo will be suppressed.
    fn sync_surface(&mut self) {
        if let Some(content) = self.workspace.active_tab().map(|t| t.content.clone()) {
            self.editor.set_content(&content);
        }
    }
}
