//! # AuraNote Architecture
//!
//! AuraNote is a **UI-agnostic note-taking library**. The tabbed document
//! model, its persistence, and the editing-surface contract all live here;
//! the CLI is just one client wired up by `main.rs`. Any other front end
//! (a windowed shell, a web view) would consume the same API facade.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, renders the tab tree, terminal I/O     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the workspace, the store, and the editor host       │
//! │  - Keeps the editing surface in sync with the active tab    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business rules over the workspace sequences         │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SnapshotStore trait (get/set/remove blobs)      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Document Model
//!
//! [`workspace::Workspace`] owns two ordered sequences — tabs and folders —
//! and the transient active-tab pointer. Folders are flat (one level, no
//! nesting); a tab belongs to at most one folder. The rendered order
//! interleaves each folder with its member tabs, followed by the root tabs,
//! and `display.rs` assigns stable user-facing indexes (`f1`, `1`, `2`, …)
//! over that order.
//!
//! ## The Editing Surface
//!
//! [`surface::EditorHost`] wraps one of two surface variants, selected once
//! at startup: a markdown-aware [`surface::RichSurface`] or a verbatim
//! [`surface::PlainSurface`] fallback. The host implements the adapter
//! contract the controller relies on: programmatic content pushes suppress
//! their own change notification, content pushed before the surface is
//! ready is replayed once it is, and the raw/plain view toggle hands
//! content between the two presentations without loss.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage trait), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business rules for each controller operation
//! - [`store`]: Storage abstraction and implementations
//! - [`workspace`]: The document model (tab/folder sequences)
//! - [`model`]: Core data types (`Tab`, `Folder`, id newtypes)
//! - [`display`]: Display indexing over the rendered order
//! - [`surface`]: Editing surface variants and the adapter host
//! - [`editor`]: External editor integration for the CLI edit flow
//! - [`shell`]: Markdown file import/export (the shell collaborator slice)
//! - [`prefs`]: Display preferences persisted per store key
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod display;
pub mod editor;
pub mod error;
pub mod model;
pub mod prefs;
pub mod shell;
pub mod store;
pub mod surface;
pub mod workspace;
