use crate::model::{FolderId, TabId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Tab not found: {0}")]
    TabNotFound(TabId),

    #[error("Folder not found: {0}")]
    FolderNotFound(FolderId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NoteError>;
