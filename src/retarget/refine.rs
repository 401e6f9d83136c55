//! Direction-vector conditioning.
//!
//! Capture-space direction vectors are remapped into the armature frame
//! and passed through a per-joint refinement before any rotation is
//! extracted. Refinements blend the raw direction with a stabilizing
//! target so jittery joints settle without losing the capture motion.

use glam::{Quat, Vec3};

/// Rest-pose direction of every driven bone in its own local frame.
pub const REST_AXIS: Vec3 = Vec3::Y;

/// Forward anchor blended into the nose direction.
pub const NOSE_ANCHOR: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Dropped forward anchor blended into the neck direction.
pub const NECK_ANCHOR: Vec3 = Vec3::new(0.0, -0.1, 1.0);

/// Maps a capture-space vector into the armature frame.
///
/// Capture space is Y-down with depth on Z; the armature is Z-up facing
/// `-Y`, so `(x, y, z)` lands on `(x, -z, -y)`.
#[inline]
#[must_use]
pub fn remap_axes(v: Vec3) -> Vec3 {
    Vec3::new(v.x, -v.z, -v.y)
}

/// Projects an elbow direction onto the plane perpendicular to the
/// shoulder axis, then averages the projection with the raw direction.
///
/// A degenerate axis leaves the direction untouched.
#[must_use]
pub fn refine_elbow(dir: Vec3, shoulder_axis: Vec3) -> Vec3 {
    let len_sq = shoulder_axis.length_squared();
    if len_sq <= f32::EPSILON {
        return dir;
    }
    let projected = dir - shoulder_axis * (shoulder_axis.dot(dir) / len_sq);
    (projected + dir) * 0.5
}

/// Averages the nose direction with [`NOSE_ANCHOR`].
#[inline]
#[must_use]
pub fn refine_nose(dir: Vec3) -> Vec3 {
    (dir + NOSE_ANCHOR) * 0.5
}

/// Averages the neck direction with [`NECK_ANCHOR`].
#[inline]
#[must_use]
pub fn refine_neck(dir: Vec3) -> Vec3 {
    (dir + NECK_ANCHOR) * 0.5
}

/// Minimal rotation carrying [`REST_AXIS`] onto `dir`.
///
/// Directions too short to normalize produce the identity, holding the
/// bone in its current pose.
#[must_use]
pub fn rotation_from_rest(dir: Vec3) -> Quat {
    let dir = dir.normalize_or_zero();
    if dir == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(REST_AXIS, dir)
}
