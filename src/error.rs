use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to create module directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write module file {}: {source}", path.display())]
    WriteModule { path: PathBuf, source: io::Error },

    #[error("Failed to update module registry {}: {source}", path.display())]
    UpdateRegistry { path: PathBuf, source: io::Error },
}
