//! Committed rotation tracks.

use glam::Quat;
use smallvec::SmallVec;

use crate::skeleton::{JointRole, JOINT_COUNT};
use crate::takes::PlaybackTiming;

/// Rotations committed for one joint, one entry per processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct JointTrack {
    pub joint: JointRole,
    pub rotations: Vec<Quat>,
}

/// Per-joint rotation tracks sharing one frame timeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotationClip {
    tracks: SmallVec<[JointTrack; JOINT_COUNT]>,
}

impl RotationClip {
    pub(crate) fn with_joints(joints: impl IntoIterator<Item = JointRole>) -> Self {
        Self {
            tracks: joints
                .into_iter()
                .map(|joint| JointTrack {
                    joint,
                    rotations: Vec::new(),
                })
                .collect(),
        }
    }

    pub(crate) fn push(&mut self, joint: JointRole, rotation: Quat) {
        match self.tracks.iter_mut().find(|track| track.joint == joint) {
            Some(track) => track.rotations.push(rotation),
            None => self.tracks.push(JointTrack {
                joint,
                rotations: vec![rotation],
            }),
        }
    }

    /// All tracks, in the order the joints were driven.
    #[inline]
    #[must_use]
    pub fn tracks(&self) -> &[JointTrack] {
        &self.tracks
    }

    /// The track for `joint`, if the clip drives it.
    #[must_use]
    pub fn track(&self, joint: JointRole) -> Option<&JointTrack> {
        self.tracks.iter().find(|track| track.joint == joint)
    }

    /// Number of driven joints.
    #[inline]
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.tracks.len()
    }

    /// Length of the longest track.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.tracks
            .iter()
            .map(|track| track.rotations.len())
            .max()
            .unwrap_or(0)
    }

    /// Whether the clip holds any keyframes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Playback timing of the clip at `fps`.
    #[must_use]
    pub fn timing(&self, fps: f32) -> PlaybackTiming {
        PlaybackTiming {
            frame_count: self.frame_count(),
            fps,
        }
    }
}
