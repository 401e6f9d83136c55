//! Temporal upsampling of pose sequences.
//!
//! [`resample`] doubles the frame count of a sequence: every scalar channel
//! is interpolated with a cubic spline over the original frame indices,
//! sampled at `2*T` evenly spaced positions spanning the original time
//! range, then Savitzky-Golay smoothed to knock down interpolation ringing.
//! The output covers exactly the same time span as the input; no frames are
//! extrapolated. Identical input always produces identical output.

mod savgol;
mod spline;

pub use savgol::{SavitzkyGolay, POLY_ORDER, WINDOW};
pub use spline::{CubicSpline, MIN_KNOTS};

use log::debug;

use crate::errors::{MarionetteError, Result};
use crate::sequence::PoseSequence;

/// Frames required before a sequence can be upsampled.
///
/// Four knots are the floor for a cubic fit, and the doubled output must
/// still fill the smoothing window; five input frames satisfy both.
pub const MIN_FRAMES: usize = 5;

/// Doubles the frame count of `poses` by spline interpolation followed by
/// Savitzky-Golay smoothing.
///
/// Every channel of every joint is processed independently with identical
/// timing, so joints stay aligned frame by frame.
///
/// # Errors
///
/// Returns [`MarionetteError::InsufficientFrames`] when the sequence has
/// fewer than [`MIN_FRAMES`] frames.
pub fn resample(poses: &PoseSequence) -> Result<PoseSequence> {
    let frames = poses.frame_count();
    if frames < MIN_FRAMES {
        return Err(MarionetteError::InsufficientFrames {
            frames,
            min: MIN_FRAMES,
        });
    }

    let width = poses.width();
    let out_frames = frames * 2;
    // Evaluation positions k * step for k in 0..2T span [0, T-1] inclusive.
    let step = (frames - 1) as f32 / (out_frames - 1) as f32;

    let filter = SavitzkyGolay::design();
    let mut out = vec![0.0_f32; out_frames * width];
    let mut channel = Vec::with_capacity(frames);
    let mut dense = Vec::with_capacity(out_frames);

    for dim in 0..width {
        poses.channel(dim, &mut channel);
        let curve = CubicSpline::fit(&channel);

        dense.clear();
        dense.extend((0..out_frames).map(|k| curve.evaluate(k as f32 * step)));

        for (row, value) in filter.smooth(&dense).into_iter().enumerate() {
            out[row * width + dim] = value;
        }
    }

    debug!("resampled {width} channels: {frames} -> {out_frames} frames");
    PoseSequence::from_flat(out, width)
}
