//! Static resource lookup
//!
//! The router asks a [`ResourceProvider`] for content by logical path
//! (`/login.html`, `/css/styles.css`). [`FsResources`] serves a directory on
//! disk; [`MemoryResources`] serves a fixed map and is handy for tests.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub enum ResourceError {
    /// Nothing exists at the requested path.
    NotFound(String),
    /// The resource exists but could not be read.
    Io(io::Error),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::NotFound(path) => write!(f, "resource not found: {}", path),
            ResourceError::Io(e) => write!(f, "resource read failed: {}", e),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Io(e) => Some(e),
            ResourceError::NotFound(_) => None,
        }
    }
}

/// Supplies static content by logical path.
pub trait ResourceProvider: Send + Sync {
    fn read(&self, path: &str) -> Result<Vec<u8>, ResourceError>;
}

/// Resources read from a directory.
#[derive(Debug, Clone)]
pub struct FsResources {
    root: PathBuf,
}

impl FsResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a logical path below the root. Anything that could climb out of
    /// the root (`..`, absolute components) resolves to nothing.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();

        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }

        Some(resolved)
    }
}

impl ResourceProvider for FsResources {
    fn read(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        let full = self
            .resolve(path)
            .filter(|p| p.is_file())
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))?;

        std::fs::read(&full).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ResourceError::NotFound(path.to_string()),
            _ => ResourceError::Io(e),
        })
    }
}

/// Resources held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(path.into(), content.into());
        self
    }
}

impl ResourceProvider for MemoryResources {
    fn read(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }
}
