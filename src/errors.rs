//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`MarionetteError`] covers the failure modes of the
//! animation core:
//! - Sequences too short to resample
//! - Rigs missing required joints
//! - Malformed frame data
//! - Unreadable or unparsable take files
//!
//! Apart from I/O, all of these are deterministic: the same input fails
//! the same way every time, so nothing is retried. Failures are reported
//! per take; batch processing continues with the remaining takes.
//!
//! # Usage
//!
//! Public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, MarionetteError>`.

use thiserror::Error;

use crate::skeleton::JointRole;

/// The main error type for the retargeting core.
///
/// Every variant is a structural defect in the input or the rig, detected
/// before any keyframe is committed for the failing sequence.
#[derive(Error, Debug)]
pub enum MarionetteError {
    // ========================================================================
    // Sequence Errors
    // ========================================================================
    /// The sequence has too few frames to interpolate and smooth.
    #[error("sequence too short to resample: {frames} frame(s), need at least {min}")]
    InsufficientFrames {
        /// Frames present in the input
        frames: usize,
        /// Minimum frames the resampler requires
        min: usize,
    },

    /// Frame data violates the fixed layout (width not a multiple of 3,
    /// inconsistent widths, or the wrong width for the skeleton).
    #[error("malformed frame data: {0}")]
    MalformedFrame(String),

    // ========================================================================
    // Rig Errors
    // ========================================================================
    /// The rig does not expose a joint the retargeter must drive.
    #[error("rig does not expose joint '{0}'")]
    UnknownJoint(JointRole),

    // ========================================================================
    // Take I/O Errors
    // ========================================================================
    /// File I/O error while reading take files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error in a take file.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, MarionetteError>`.
pub type Result<T> = std::result::Result<T, MarionetteError>;
