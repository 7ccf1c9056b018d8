//! # Shell Collaborator
//!
//! The slice of the window/shell capability the core actually calls: file
//! dialogs hand the core a markdown file's name and content on import, and
//! receive a `{title, content}` pair on export. Here those are plain
//! filesystem calls; window controls, theming IPC, and auto-update belong
//! to the shell and are not modeled.

use crate::error::{NoteError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A markdown file picked for import: the base name (without extension)
/// becomes the tab title, the content becomes the tab body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedNote {
    pub name: String,
    pub content: String,
}

/// Reads a markdown file into an [`ImportedNote`].
pub fn read_markdown_file<P: AsRef<Path>>(path: P) -> Result<ImportedNote> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(NoteError::Io)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Imported note".to_string());
    Ok(ImportedNote { name, content })
}

/// Writes a tab out as `<dir>/<sanitized title>.md` and returns the path.
pub fn write_markdown_file<P: AsRef<Path>>(dir: P, title: &str, content: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(NoteError::Io)?;
    }
    let path = dir.join(format!("{}.md", sanitize_filename(title)));
    fs::write(&path, content).map_err(NoteError::Io)?;
    Ok(path)
}

/// Keeps alphanumerics, spaces, dashes, and underscores; everything else
/// becomes an underscore.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}
