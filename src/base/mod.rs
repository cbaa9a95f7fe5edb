//! Foundation types for the robotfw toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextSize`], [`TextRange`] - Byte offsets into a document
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`FxIndexSet`], [`FxIndexMap`] - Insertion-ordered hash collections
//!
//! This module has NO dependencies on other robotfw modules.

mod span;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;

/// Insertion-ordered set with the Fx hasher.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Insertion-ordered map with the Fx hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
