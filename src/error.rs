/// Error types for loading site content and settings
///
/// Nothing in the filtering core can fail; these only surface at start-up
/// while the content document and the config file are read.
use std::path::PathBuf;
use thiserror::Error;

/// Failures while building the site content and project catalog
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed content document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project #{index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("duplicate project title {0:?}")]
    DuplicateTitle(String),

    #[error("project {title:?} has an empty description")]
    EmptyDescription { title: String },
}

/// Failures while reading the user configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config file: {0}")]
    Parse(#[from] serde_json::Error),
}
