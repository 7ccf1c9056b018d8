//! # Storage Layer
//!
//! This module defines the persistence abstraction. The [`SnapshotStore`]
//! trait is deliberately narrow — string keys mapped to opaque string
//! blobs, last-write-wins, full-snapshot overwrites — because that is all
//! the document model needs: each sequence (tabs, folders) serializes as
//! one blob under one key, and display preferences each get a key of their
//! own.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business rules **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage — one file per key under a
//!   data directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Keys
//!
//! The document model uses [`TABS_KEY`] and [`FOLDERS_KEY`]; the
//! preference keys live in `prefs.rs`. There is no cross-key transaction:
//! a write replaces exactly one blob, and a malformed blob is recovered by
//! discarding it (see `Workspace::load`), never by surfacing a fatal
//! error.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Store key holding the serialized tab sequence.
pub const TABS_KEY: &str = "tabs";
/// Store key holding the serialized folder sequence.
pub const FOLDERS_KEY: &str = "folders";

/// Abstract interface for snapshot persistence.
pub trait SnapshotStore {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Drop the blob stored under `key`. Removing an absent key is not an
    /// error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
