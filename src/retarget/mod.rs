//! Pose retargeting onto an armature.
//!
//! Each input frame carries one direction vector per joint. Per frame the
//! solver snapshots the shoulder axis, conditions every driven joint's
//! vector, extracts the minimal bone-local rotation and composes it onto
//! the joint's accumulated rotation, committing the result as a keyframe.
//! The head joint anchors the skeleton layout but is never driven.

mod refine;
mod rig;

pub use refine::{
    refine_elbow, refine_neck, refine_nose, remap_axes, rotation_from_rest, NECK_ANCHOR,
    NOSE_ANCHOR, REST_AXIS,
};
pub use rig::{Keyframe, RigHost, SkeletonPose};

use glam::Quat;
use log::{debug, trace};

use crate::errors::{MarionetteError, Result};
use crate::sequence::PoseSequence;
use crate::skeleton::{JointRole, Refinement, FRAME_WIDTH, JOINT_COUNT};
use crate::tracks::RotationClip;

/// Drives an armature from a pose sequence, one keyframe per driven joint
/// per frame.
#[derive(Debug, Clone, Default)]
pub struct Retargeter {
    frame_limit: Option<usize>,
}

impl Retargeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps how many frames [`run`](Self::run) processes.
    #[must_use]
    pub fn with_frame_limit(limit: usize) -> Self {
        Self {
            frame_limit: Some(limit),
        }
    }

    /// Retargets `poses` onto `host` and returns the committed rotations
    /// as a clip.
    ///
    /// The sequence and the rig are validated up front; on error the host
    /// keeps every keyframe it held on entry.
    ///
    /// # Errors
    ///
    /// Returns [`MarionetteError::MalformedFrame`] when the sequence width
    /// is not [`FRAME_WIDTH`], and [`MarionetteError::UnknownJoint`] when
    /// the host is missing a driven joint.
    pub fn run(&self, host: &mut impl RigHost, poses: &PoseSequence) -> Result<RotationClip> {
        if poses.width() != FRAME_WIDTH {
            return Err(MarionetteError::MalformedFrame(format!(
                "pose frames are {} scalars wide, retargeting needs {FRAME_WIDTH}",
                poses.width()
            )));
        }
        for joint in JointRole::RETARGETED {
            if !host.has_joint(joint) {
                return Err(MarionetteError::UnknownJoint(joint));
            }
        }

        host.reset_rest_pose();

        let frames = self
            .frame_limit
            .map_or(poses.frame_count(), |limit| limit.min(poses.frame_count()));
        let mut accumulated = [Quat::IDENTITY; JOINT_COUNT];
        let mut clip = RotationClip::with_joints(JointRole::RETARGETED);

        for frame in 0..frames {
            // One shoulder-axis snapshot per frame; every refinement within
            // the frame sees the same axis even if the host moves under it.
            let shoulder_axis =
                host.head_position(JointRole::ElbowR) - host.head_position(JointRole::ElbowL);

            for joint in JointRole::RETARGETED {
                let dir = remap_axes(poses.joint_vector(frame, joint.vector_index()));
                let dir = match joint.refinement() {
                    Refinement::AsIs => dir,
                    Refinement::ElbowPlane => refine_elbow(dir, shoulder_axis),
                    Refinement::NoseBlend => refine_nose(dir),
                    Refinement::NeckBlend => refine_neck(dir),
                };
                let local = host.bone_basis(joint) * dir;
                let step = rotation_from_rest(local);

                let slot = &mut accumulated[joint.vector_index()];
                *slot *= step;

                if frame == 0 {
                    trace!("{joint}: dir {dir:?} -> local {local:?} -> step {step:?}");
                }
                host.set_keyframe(joint, frame, *slot);
                clip.push(joint, *slot);
            }
        }

        debug!(
            "retargeted {frames} frames onto {} joints",
            JointRole::RETARGETED.len()
        );
        Ok(clip)
    }
}
