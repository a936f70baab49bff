use std::path::PathBuf;

use thiserror::Error;

/// Problems found in the collected form values when Download is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select a folder to save to")]
    MissingSaveDir,

    #[error("Folder does not exist: {}", .0.display())]
    SaveDirNotFound(PathBuf),

    #[error("Not a folder: {}", .0.display())]
    SaveDirNotDirectory(PathBuf),

    #[error("Folder is not writable: {}", .0.display())]
    SaveDirReadOnly(PathBuf),

    #[error("Cannot access folder: {}", .0.display())]
    SaveDirInaccessible(PathBuf),

    #[error("Unknown placeholder in filename format: {{{0}}}")]
    UnknownPlaceholder(String),

    #[error("Filename format produces an empty filename")]
    EmptyFilename,

    #[error("The chapter starting index must be integer! Got: {0:?}")]
    InvalidStartChapter(String),

    #[error("Catalogue URL or novel ID is required")]
    EmptyCatalogueRef,

    #[error("Not a catalogue URL or novel ID: {0}")]
    MalformedCatalogueRef(String),
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Failed to hand over request: {0}")]
    Dispatch(String),
}
