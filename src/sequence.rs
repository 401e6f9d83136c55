//! Pose sequence storage.
//!
//! A [`PoseSequence`] is the raw input of the pipeline: T frames, each a flat
//! `f32` array of identical width, logically grouped into 3-vectors (one per
//! joint, in [`JointRole`](crate::skeleton::JointRole) order). Frames are
//! stored row-major in one contiguous buffer.
//!
//! Sequences are validated on construction and read-only afterwards; the
//! resampler produces a new sequence rather than mutating in place.

use glam::Vec3;

use crate::errors::{MarionetteError, Result};
use crate::skeleton::VECTOR_DIMS;

/// An immutable, validated sequence of fixed-width pose frames.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSequence {
    /// Row-major frame data, `frame_count * width` scalars.
    data: Vec<f32>,
    /// Scalars per frame (a multiple of [`VECTOR_DIMS`]).
    width: usize,
}

impl PoseSequence {
    /// Builds a sequence from per-frame rows.
    ///
    /// Fails with [`MarionetteError::MalformedFrame`] if the sequence is
    /// empty, the width is not a positive multiple of 3, or any frame
    /// disagrees with the first frame's width.
    pub fn from_frames(frames: Vec<Vec<f32>>) -> Result<Self> {
        let Some(first) = frames.first() else {
            return Err(MarionetteError::MalformedFrame(
                "sequence contains no frames".into(),
            ));
        };
        let width = first.len();
        check_width(width)?;

        let mut data = Vec::with_capacity(frames.len() * width);
        for (index, frame) in frames.iter().enumerate() {
            if frame.len() != width {
                return Err(MarionetteError::MalformedFrame(format!(
                    "frame {index} has width {}, expected {width}",
                    frame.len()
                )));
            }
            data.extend_from_slice(frame);
        }

        Ok(Self { data, width })
    }

    /// Builds a sequence from an already-flat row-major buffer.
    pub fn from_flat(data: Vec<f32>, width: usize) -> Result<Self> {
        check_width(width)?;
        if data.is_empty() {
            return Err(MarionetteError::MalformedFrame(
                "sequence contains no frames".into(),
            ));
        }
        if data.len() % width != 0 {
            return Err(MarionetteError::MalformedFrame(format!(
                "flat buffer of {} scalars is not a whole number of width-{width} frames",
                data.len()
            )));
        }
        Ok(Self { data, width })
    }

    /// Number of frames.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.data.len() / self.width
    }

    /// Scalars per frame.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Joint vectors per frame.
    #[inline]
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.width / VECTOR_DIMS
    }

    /// One frame as a flat slice.
    #[inline]
    #[must_use]
    pub fn frame(&self, index: usize) -> &[f32] {
        let start = index * self.width;
        &self.data[start..start + self.width]
    }

    /// The raw 3-vector of one joint in one frame, in estimator space.
    #[inline]
    #[must_use]
    pub fn joint_vector(&self, frame: usize, joint: usize) -> Vec3 {
        let base = frame * self.width + joint * VECTOR_DIMS;
        Vec3::new(self.data[base], self.data[base + 1], self.data[base + 2])
    }

    /// The whole buffer, row-major.
    #[inline]
    #[must_use]
    pub fn as_flat(&self) -> &[f32] {
        &self.data
    }

    /// Copies one scalar channel (a single dimension across all frames)
    /// into `out`.
    pub(crate) fn channel(&self, dim: usize, out: &mut Vec<f32>) {
        out.clear();
        out.extend(
            self.data
                .iter()
                .skip(dim)
                .step_by(self.width)
                .copied(),
        );
    }
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 || width % VECTOR_DIMS != 0 {
        return Err(MarionetteError::MalformedFrame(format!(
            "frame width {width} is not a positive multiple of {VECTOR_DIMS}"
        )));
    }
    Ok(())
}
