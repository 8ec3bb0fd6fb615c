use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading tooltip configuration
#[derive(Error, Debug)]
pub enum TooltipError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid theme file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },
    #[error("Could not find a configuration directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, TooltipError>;
