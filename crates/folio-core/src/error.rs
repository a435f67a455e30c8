//! Errors raised while building the navigation engine
//!
//! Runtime inputs never fail; these only surface while loading
//! configuration or assembling the section registry.

use thiserror::Error;

/// Errors that can occur while setting up navigation
#[derive(Error, Debug)]
pub enum NavError {
    #[error("section registry must contain at least one section")]
    EmptyRegistry,

    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("invalid navigation config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for setup operations
pub type Result<T> = std::result::Result<T, NavError>;
