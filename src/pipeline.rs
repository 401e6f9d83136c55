//! End-to-end animation pipeline.
//!
//! [`animate`] turns one take into committed keyframes: optional temporal
//! upsampling, then retargeting onto the host rig. [`animate_batch`]
//! repeats that over a list of takes on a shared host; a take that fails
//! is logged and skipped without disturbing the takes around it.

use log::{info, warn};

use crate::errors::Result;
use crate::resample::resample;
use crate::retarget::{Retargeter, RigHost};
use crate::takes::{PlaybackTiming, Take};
use crate::tracks::RotationClip;

/// Pipeline tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineOptions {
    /// Double the frame count before retargeting.
    pub upsample: bool,
    /// Playback rate stamped on finished clips.
    pub fps: f32,
    /// Retarget only the first N frames.
    pub frame_limit: Option<usize>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            upsample: true,
            fps: 30.0,
            frame_limit: None,
        }
    }
}

/// A finished take: the committed clip and its playback timing.
#[derive(Debug, Clone)]
pub struct TakeResult {
    pub name: String,
    pub clip: RotationClip,
    pub timing: PlaybackTiming,
}

/// Hook invoked after each finished take.
pub trait Finisher {
    /// Runs once per finished take.
    ///
    /// # Errors
    ///
    /// A returned error marks the take as failed in its batch slot.
    fn finish(&mut self, result: &TakeResult) -> Result<()>;
}

/// Finisher that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFinisher;

impl Finisher for NoFinisher {
    fn finish(&mut self, _result: &TakeResult) -> Result<()> {
        Ok(())
    }
}

/// Finisher that logs a one-line summary per take.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFinisher;

impl Finisher for LogFinisher {
    fn finish(&mut self, result: &TakeResult) -> Result<()> {
        info!(
            "take '{}': {} frames at {} fps ({:.2}s)",
            result.name,
            result.timing.frame_count,
            result.timing.fps,
            result.timing.duration_secs()
        );
        Ok(())
    }
}

/// Animates one take onto `host`.
///
/// # Errors
///
/// Propagates resampling and retargeting failures; a failed take commits
/// no keyframes to the host.
pub fn animate(
    host: &mut impl RigHost,
    take: &Take,
    options: &PipelineOptions,
) -> Result<TakeResult> {
    let resampled;
    let poses = if options.upsample {
        resampled = resample(&take.poses)?;
        &resampled
    } else {
        &take.poses
    };

    let retargeter = match options.frame_limit {
        Some(limit) => Retargeter::with_frame_limit(limit),
        None => Retargeter::new(),
    };
    let clip = retargeter.run(host, poses)?;
    let timing = clip.timing(options.fps);

    Ok(TakeResult {
        name: take.name.clone(),
        clip,
        timing,
    })
}

/// Animates every take in order on a shared host.
///
/// Takes are resolved independently: a failure is logged, reported in the
/// returned slot, and the batch moves on. `finisher` runs once per
/// successful take.
pub fn animate_batch<H, F>(
    host: &mut H,
    takes: &[Take],
    options: &PipelineOptions,
    finisher: &mut F,
) -> Vec<Result<TakeResult>>
where
    H: RigHost,
    F: Finisher,
{
    takes
        .iter()
        .map(|take| {
            let outcome = animate(host, take, options).and_then(|result| {
                finisher.finish(&result)?;
                Ok(result)
            });
            if let Err(err) = &outcome {
                warn!("take '{}' skipped: {err}", take.name);
            }
            outcome
        })
        .collect()
}
