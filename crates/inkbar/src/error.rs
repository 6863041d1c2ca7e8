//! Error types for the widget crate.
//!
//! Activation deliberately degrades to silent no-ops when collaborators are
//! gone, so very little here can fail. The fallible surface is limited to
//! addressing buttons by index.

use thiserror::Error;

/// Errors reported by [`EditorToolbar`](crate::toolbar::EditorToolbar).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolbarError {
    /// A button index was out of range for the current configuration.
    #[error("button index {index} out of range (toolbar has {count} buttons)")]
    ButtonIndex { index: usize, count: usize },
}

/// Convenience alias for toolbar operations.
pub type Result<T> = std::result::Result<T, ToolbarError>;
