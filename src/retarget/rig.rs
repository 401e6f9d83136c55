//! Rig access for retargeting.
//!
//! [`RigHost`] is the seam between the solver and whatever owns the
//! armature. Queries are read-only; the solver keeps all accumulated pose
//! state on its side and only writes through `set_keyframe`.
//! [`SkeletonPose`] is the built-in host: an in-memory upper-body rig that
//! records every committed keyframe for inspection.

use glam::{Mat3, Quat, Vec3};
use rustc_hash::FxHashMap;

use crate::skeleton::{JointRole, JOINT_COUNT};

/// A rotation committed for one joint at one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub joint: JointRole,
    pub frame: usize,
    pub rotation: Quat,
}

/// Armature access required by the retargeter.
///
/// `bone_basis` and `head_position` are only called for joints that
/// `has_joint` reported present; implementations may panic otherwise.
pub trait RigHost {
    /// Whether the rig exposes a bone for `joint`.
    fn has_joint(&self, joint: JointRole) -> bool;

    /// Change of basis taking armature-space directions into the joint's
    /// bone-local frame.
    fn bone_basis(&self, joint: JointRole) -> Mat3;

    /// Armature-space position of the joint's bone head.
    fn head_position(&self, joint: JointRole) -> Vec3;

    /// Returns the rig to its rest pose and drops any recorded keyframes.
    fn reset_rest_pose(&mut self);

    /// Records `rotation` as the joint's local rotation at `frame`.
    fn set_keyframe(&mut self, joint: JointRole, frame: usize, rotation: Quat);
}

#[derive(Debug, Clone, Copy)]
struct Bone {
    head: Vec3,
    basis: Mat3,
}

/// An in-memory rig with a recorded keyframe log.
#[derive(Debug, Clone, Default)]
pub struct SkeletonPose {
    bones: FxHashMap<JointRole, Bone>,
    keyframes: Vec<Keyframe>,
}

impl SkeletonPose {
    /// A symmetric upper-body rig in rest pose.
    ///
    /// Bone heads sit in armature space with the character upright on `+Z`
    /// and facing `-Y`; every bone basis is the identity.
    #[must_use]
    pub fn upper_body() -> Self {
        const LAYOUT: [(JointRole, Vec3); JOINT_COUNT] = [
            (JointRole::Neck, Vec3::new(0.0, 0.0, 1.45)),
            (JointRole::Nose, Vec3::new(0.0, -0.11, 1.60)),
            (JointRole::Head, Vec3::new(0.0, 0.0, 1.55)),
            (JointRole::ShoulderR, Vec3::new(-0.18, 0.0, 1.42)),
            (JointRole::ElbowR, Vec3::new(-0.46, 0.0, 1.42)),
            (JointRole::WristR, Vec3::new(-0.72, 0.0, 1.42)),
            (JointRole::ShoulderL, Vec3::new(0.18, 0.0, 1.42)),
            (JointRole::ElbowL, Vec3::new(0.46, 0.0, 1.42)),
            (JointRole::WristL, Vec3::new(0.72, 0.0, 1.42)),
        ];

        let mut pose = Self::default();
        for (joint, head) in LAYOUT {
            pose.insert_joint(joint, head, Mat3::IDENTITY);
        }
        pose
    }

    /// Adds or replaces a bone.
    pub fn insert_joint(&mut self, joint: JointRole, head: Vec3, basis: Mat3) {
        self.bones.insert(joint, Bone { head, basis });
    }

    /// Removes a bone, if present.
    pub fn remove_joint(&mut self, joint: JointRole) {
        self.bones.remove(&joint);
    }

    /// Number of bones in the rig.
    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Every committed keyframe, in commit order.
    #[inline]
    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// The rotation committed for `joint` at `frame`, if any.
    #[must_use]
    pub fn rotation_at(&self, joint: JointRole, frame: usize) -> Option<Quat> {
        self.keyframes
            .iter()
            .rev()
            .find(|key| key.joint == joint && key.frame == frame)
            .map(|key| key.rotation)
    }
}

impl RigHost for SkeletonPose {
    fn has_joint(&self, joint: JointRole) -> bool {
        self.bones.contains_key(&joint)
    }

    fn bone_basis(&self, joint: JointRole) -> Mat3 {
        self.bones[&joint].basis
    }

    fn head_position(&self, joint: JointRole) -> Vec3 {
        self.bones[&joint].head
    }

    fn reset_rest_pose(&mut self) {
        self.keyframes.clear();
    }

    fn set_keyframe(&mut self, joint: JointRole, frame: usize, rotation: Quat) {
        self.keyframes.push(Keyframe {
            joint,
            frame,
            rotation,
        });
    }
}
