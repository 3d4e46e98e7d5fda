//! Generated project files
//!
//! This module provides:
//! - The `package.json` manifest with optional dependency insertions
//! - The static `tsconfig.json` emitted for TypeScript projects
//! - The project README

pub mod documents;
pub mod manifest;

pub use documents::{readme, tsconfig};
pub use manifest::package_json;

/// A file rendered for the project root, written once and never re-read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the project root
    pub path: &'static str,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: &'static str, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }
}
