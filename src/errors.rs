//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`LiftoffError`] covers the few failure modes the
//! animation and instancing core has:
//! - Out-of-range instance or UI element indices
//! - Settings files that fail to load or parse
//!
//! Degenerate animators (zero or one keyframe) are *not* errors; they settle
//! on a steady value instead.
//!
//! # Usage
//!
//! Fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, LiftoffError>`.
//!
//! ```rust,ignore
//! use liftoff::errors::Result;
//!
//! fn nudge(group: &mut ObjectInstanceGroup<'_, Mesh>) -> Result<()> {
//!     group.transform_mut(0)?.position.y += 1.0;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum LiftoffError {
    // ========================================================================
    // Indexing Errors
    // ========================================================================
    /// Instance index past the end of an [`ObjectInstanceGroup`](crate::scene::ObjectInstanceGroup).
    #[error("Instance index out of bounds: {index} (instance count: {count})")]
    InstanceIndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of instances in the group
        count: usize,
    },

    /// UI element index past the end of a [`UiGroup`](crate::ui::UiGroup).
    #[error("UI element index out of bounds: {index} (element count: {count})")]
    UiElementIndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of elements in the group
        count: usize,
    },

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// Settings JSON could not be parsed.
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, LiftoffError>`.
pub type Result<T> = std::result::Result<T, LiftoffError>;
