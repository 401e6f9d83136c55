#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod pipeline;
pub mod resample;
pub mod retarget;
pub mod sequence;
pub mod skeleton;
pub mod takes;
pub mod tracks;

pub use errors::{MarionetteError, Result};
pub use pipeline::{
    animate, animate_batch, Finisher, LogFinisher, NoFinisher, PipelineOptions, TakeResult,
};
pub use resample::{resample, MIN_FRAMES};
pub use retarget::{Keyframe, Retargeter, RigHost, SkeletonPose};
pub use sequence::PoseSequence;
pub use skeleton::{JointRole, Refinement, FRAME_WIDTH, JOINT_COUNT, VECTOR_DIMS};
pub use takes::{load_take, load_takes, DirectionChannel, PlaybackTiming, RawTake, Take};
pub use tracks::{JointTrack, RotationClip};
