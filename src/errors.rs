//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`MarionetteError`] covers the failures that are
//! reported to the caller:
//! - Keyframe and animation construction errors (shape, ordering, time)
//! - Skeleton authoring errors (stale handles, bad child paths)
//! - Configuration loading errors
//! - Window system errors
//!
//! Per-frame playback never returns an error. Empty animations, zero-length
//! keyframe spans and a missing active animation degrade to a no-op instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use marionette::errors::Result;
//!
//! fn build() -> Result<()> {
//!     let mut animation = Animation::new("wave");
//!     animation.push_keyframe(Keyframe::new(pose, 0.0))?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum MarionetteError {
    // ========================================================================
    // Animation Construction Errors
    // ========================================================================
    /// A keyframe pose does not have the tree shape of the reference pose.
    ///
    /// `path` is the child-index path from the root to the first node whose
    /// child count differs.
    #[error("Keyframe {keyframe} pose shape differs from the reference at node path {path:?}")]
    ShapeMismatch {
        /// Index of the offending keyframe inside its animation
        keyframe: usize,
        /// Child-index path of the first differing node
        path: Vec<usize>,
    },

    /// A keyframe was appended with a time earlier than the previous keyframe.
    #[error("Keyframe {index} at time {time} is earlier than the previous keyframe at {previous}")]
    KeyframeOutOfOrder {
        /// Index the keyframe would have had
        index: usize,
        /// The rejected time
        time: f32,
        /// Time of the last stored keyframe
        previous: f32,
    },

    /// A keyframe time is negative, infinite or NaN.
    #[error("Keyframe {index} has invalid time {time}")]
    InvalidKeyframeTime {
        /// Index the keyframe would have had
        index: usize,
        /// The rejected time
        time: f32,
    },

    /// An animation index does not exist in the animator.
    #[error("Animation index out of bounds: {index} (len: {len})")]
    AnimationIndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Number of registered animations
        len: usize,
    },

    // ========================================================================
    // Skeleton Errors
    // ========================================================================
    /// A bone handle does not belong to the skeleton.
    #[error("Invalid bone handle: {0}")]
    InvalidBoneHandle(String),

    /// No bone with the given name exists.
    #[error("Bone not found: {0}")]
    BoneNotFound(String),

    /// A child-index path does not resolve to a node.
    #[error("Invalid bone path: {0:?}")]
    InvalidBonePath(Vec<usize>),

    // ========================================================================
    // I/O & Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // Platform Errors
    // ========================================================================
    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[cfg(feature = "winit")]
    #[error("Window creation failed: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),
}

/// Alias for `Result<T, MarionetteError>`.
pub type Result<T> = std::result::Result<T, MarionetteError>;
