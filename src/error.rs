//! Error handling for the macro builder backend
//!
//! This module provides idiomatic Rust error types using thiserror. Note that
//! the compiler itself never returns an error: unresolved commands and invalid
//! coordinate input degrade to inline script diagnostics so a partially
//! invalid macro set still yields a complete script. The types here cover the
//! request boundary and the I/O collaborators around the compiler.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the macro builder service
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("run error: {0}")]
    Run(#[from] RunError),

    #[error("pick error: {0}")]
    Pick(#[from] PickError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from persisting and launching generated scripts
#[derive(Error, Debug)]
pub enum RunError {
    #[error("failed to persist script file: {0}")]
    Persist(#[source] std::io::Error),

    #[error("failed to launch interpreter '{path}': {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the blocking coordinate-picker collaborator
#[derive(Error, Debug)]
pub enum PickError {
    #[error("no position picker is configured on this host")]
    Unavailable,

    #[error("position capture failed: {message}")]
    Capture { message: String },
}
