//! Capture takes and their wire format.
//!
//! A take arrives as a JSON file with one direction-vector stream per
//! source: the performer's measured vectors under `human_dir_vec` and the
//! model's generated vectors under `out_dir_vec`. [`RawTake`] mirrors that
//! layout verbatim; [`Take`] is one selected, validated stream with a name
//! for logging and output files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::sequence::PoseSequence;

/// Which direction-vector stream of a raw take to animate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionChannel {
    /// Vectors measured from the performer.
    #[default]
    Human,
    /// Vectors generated by the model.
    #[serde(rename = "out")]
    Output,
}

/// One capture session as decoded from JSON.
///
/// Each frame is a flat row of `[x, y, z]` triples, one per joint. Either
/// stream may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTake {
    #[serde(default)]
    pub human_dir_vec: Vec<Vec<f32>>,
    #[serde(default)]
    pub out_dir_vec: Vec<Vec<f32>>,
}

impl RawTake {
    /// Decodes a raw take from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Selects one stream and validates it into a [`Take`].
    ///
    /// # Errors
    ///
    /// Returns `MalformedFrame` when the selected stream is absent, empty,
    /// or has frames of uneven width.
    pub fn into_take(self, name: impl Into<String>, channel: DirectionChannel) -> Result<Take> {
        let frames = match channel {
            DirectionChannel::Human => self.human_dir_vec,
            DirectionChannel::Output => self.out_dir_vec,
        };
        Ok(Take {
            name: name.into(),
            poses: PoseSequence::from_frames(frames)?,
        })
    }
}

/// A named, validated pose sequence ready for the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Take {
    pub name: String,
    pub poses: PoseSequence,
}

impl Take {
    pub fn new(name: impl Into<String>, poses: PoseSequence) -> Self {
        Self {
            name: name.into(),
            poses,
        }
    }
}

/// Loads one take file, naming the take after the file stem.
pub fn load_take(path: impl AsRef<Path>, channel: DirectionChannel) -> Result<Take> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned();
    let raw = RawTake::from_json(&fs::read_to_string(path)?)?;
    raw.into_take(name, channel)
}

/// Loads every `.json` take in `dir`, in file-name order.
///
/// Fails on the first unreadable or unparsable file; use
/// [`load_take`] per file for softer handling.
pub fn load_takes(dir: impl AsRef<Path>, channel: DirectionChannel) -> Result<Vec<Take>> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    paths.iter().map(|path| load_take(path, channel)).collect()
}

/// Frame count and playback rate of a finished clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaybackTiming {
    pub frame_count: usize,
    pub fps: f32,
}

impl PlaybackTiming {
    /// Clip duration in seconds; zero when the rate is unset.
    #[must_use]
    pub fn duration_secs(&self) -> f32 {
        if self.fps > 0.0 {
            self.frame_count as f32 / self.fps
        } else {
            0.0
        }
    }
}
