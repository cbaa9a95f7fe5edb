//! Resource loading: where imported files come from.
//!
//! Parsing never touches the filesystem directly. Every resource lookup goes
//! through a [`ResourceLoader`]: [`FsLoader`] reads real files, [`SourceSet`]
//! serves contents that were read (or written) ahead of time.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use thiserror::Error;

/// Failure to load an imported resource.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no contents loaded for {}", .path.display())]
    NotLoaded { path: PathBuf },
}

impl ImportError {
    /// The resource the error is about.
    pub fn path(&self) -> &Path {
        match self {
            ImportError::Io { path, .. } | ImportError::NotLoaded { path } => path,
        }
    }
}

/// Source of resource file contents.
pub trait ResourceLoader {
    /// Whether `path` names a resource that can be loaded.
    fn exists(&self, path: &Path) -> bool;

    /// Load the full text of a resource.
    fn load(&self, path: &Path) -> Result<Arc<str>, ImportError>;

    /// The identity of the resource at `path`.
    ///
    /// Two spellings of the same resource must map to the same path, since
    /// the import cycle guard compares these.
    fn canonicalize(&self, path: &Path) -> PathBuf {
        normalize(path)
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// A `..` at the root stays at the root; a leading `..` of a relative path
/// is kept.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    out.push(component);
                }
            },
            other => out.push(other),
        }
    }
    out
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for &L {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn load(&self, path: &Path) -> Result<Arc<str>, ImportError> {
        (**self).load(path)
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        (**self).canonicalize(path)
    }
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for Arc<L> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn load(&self, path: &Path) -> Result<Arc<str>, ImportError> {
        (**self).load(path)
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        (**self).canonicalize(path)
    }
}

/// Loads resources from the local filesystem with blocking reads.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLoader;

impl ResourceLoader for FsLoader {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> Result<Arc<str>, ImportError> {
        fs::read_to_string(path)
            .map(Arc::from)
            .map_err(|source| ImportError::Io {
                path: path.to_owned(),
                source,
            })
    }

    /// Resolves symlinks when the file exists, lexically otherwise.
    fn canonicalize(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| normalize(path))
    }
}

/// In-memory resource contents keyed by path.
///
/// Paths are stored and looked up with `.` and `..` resolved.
///
/// Can be filled through a shared reference, so a host holding the set
/// behind an `Arc` can keep updating it between parses.
#[derive(Debug, Default)]
pub struct SourceSet {
    files: RwLock<IndexMap<PathBuf, Arc<str>>>,
}

impl SourceSet {
    /// Create a new empty source set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the contents of a file.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Arc<str>>) {
        let path: PathBuf = path.into();
        self.files.write().insert(normalize(&path), contents.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Arc<str>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Remove a file from the set.
    pub fn remove(&self, path: &Path) -> Option<Arc<str>> {
        self.files.write().swap_remove(&normalize(path))
    }

    /// Get the contents of a file.
    pub fn contents(&self, path: &Path) -> Option<Arc<str>> {
        self.files.read().get(&normalize(path)).cloned()
    }

    /// Get the number of files.
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Check if the source set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceLoader for SourceSet {
    fn exists(&self, path: &Path) -> bool {
        self.files.read().contains_key(&normalize(path))
    }

    fn load(&self, path: &Path) -> Result<Arc<str>, ImportError> {
        self.contents(path).ok_or_else(|| ImportError::NotLoaded {
            path: path.to_owned(),
        })
    }
}
