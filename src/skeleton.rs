//! Fixed skeleton topology.
//!
//! The core drives a fixed 9-joint upper-body/head armature. Each joint owns
//! a 3-vector slot in the flat frame layout; the slot order is part of the
//! wire format shared with the upstream pose estimator and never changes at
//! runtime.

use std::fmt;

/// Scalars per joint in a frame (one 3D direction vector).
pub const VECTOR_DIMS: usize = 3;

/// Joints in the fixed layout.
pub const JOINT_COUNT: usize = 9;

/// Flat width of one frame: [`VECTOR_DIMS`] scalars for each of the
/// [`JOINT_COUNT`] joints.
pub const FRAME_WIDTH: usize = VECTOR_DIMS * JOINT_COUNT;

/// A joint of the fixed skeleton, in frame-layout order.
///
/// The discriminant doubles as the joint's vector index within a frame.
/// `Head` occupies a layout slot but is never retargeted; its vector is a
/// reserved extension slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointRole {
    Neck = 0,
    Nose = 1,
    Head = 2,
    ShoulderR = 3,
    ElbowR = 4,
    WristR = 5,
    ShoulderL = 6,
    ElbowL = 7,
    WristL = 8,
}

/// How a joint's remapped direction vector is refined before rotation
/// extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refinement {
    /// Use the remapped vector as-is (shoulders, wrists).
    AsIs,
    /// Blend toward the projection onto the plane orthogonal to the
    /// shoulder axis (both elbows).
    ElbowPlane,
    /// Blend toward the head-forward rest vector `(0, 0, 1)`.
    NoseBlend,
    /// Blend toward the slightly tilted spine rest vector `(0, -0.1, 1)`.
    NeckBlend,
}

impl JointRole {
    /// Every joint of the layout, in vector-index order.
    pub const ALL: [JointRole; JOINT_COUNT] = [
        JointRole::Neck,
        JointRole::Nose,
        JointRole::Head,
        JointRole::ShoulderR,
        JointRole::ElbowR,
        JointRole::WristR,
        JointRole::ShoulderL,
        JointRole::ElbowL,
        JointRole::WristL,
    ];

    /// The joints that receive rotations, in processing order. `Head` is
    /// never driven.
    pub const RETARGETED: [JointRole; JOINT_COUNT - 1] = [
        JointRole::Neck,
        JointRole::Nose,
        JointRole::ShoulderR,
        JointRole::ElbowR,
        JointRole::WristR,
        JointRole::ShoulderL,
        JointRole::ElbowL,
        JointRole::WristL,
    ];

    /// Position of this joint's 3-vector among the frame's vectors.
    #[inline]
    #[must_use]
    pub const fn vector_index(self) -> usize {
        self as usize
    }

    /// The bone name this joint binds to on the source armature.
    #[must_use]
    pub const fn bone_name(self) -> &'static str {
        match self {
            JointRole::Neck => "Neck",
            JointRole::Nose => "Nose",
            JointRole::Head => "Head",
            JointRole::ShoulderR => "shoulder.R",
            JointRole::ElbowR => "elbow.R",
            JointRole::WristR => "wrist.R",
            JointRole::ShoulderL => "shoulder.L",
            JointRole::ElbowL => "elbow.L",
            JointRole::WristL => "wrist.L",
        }
    }

    /// The refinement strategy applied to this joint's direction vector.
    #[must_use]
    pub const fn refinement(self) -> Refinement {
        match self {
            JointRole::Neck => Refinement::NeckBlend,
            JointRole::Nose => Refinement::NoseBlend,
            JointRole::ElbowR | JointRole::ElbowL => Refinement::ElbowPlane,
            JointRole::Head
            | JointRole::ShoulderR
            | JointRole::WristR
            | JointRole::ShoulderL
            | JointRole::WristL => Refinement::AsIs,
        }
    }

    /// Resolves an armature bone name back to its role.
    #[must_use]
    pub fn from_bone_name(name: &str) -> Option<JointRole> {
        JointRole::ALL.into_iter().find(|role| role.bone_name() == name)
    }
}

impl fmt::Display for JointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bone_name())
    }
}
