//! Pipeline Tests
//!
//! Tests for:
//! - animate(): upsample + retarget end to end, options handling
//! - animate_batch(): per-take isolation on a shared rig
//! - Finisher hooks (counting, rejecting)
//! - RawTake channel selection and take-file loading

use std::fs;

use glam::{Quat, Vec3};

use marionette::retarget::{refine_neck, refine_nose, rotation_from_rest};
use marionette::{
    animate, animate_batch, load_takes, DirectionChannel, Finisher, JointRole, MarionetteError,
    NoFinisher, PipelineOptions, PoseSequence, RawTake, SkeletonPose, Take, TakeResult,
    FRAME_WIDTH,
};

// Compares via the quaternion dot product; `acos`-based angle checks blow
// up on the rounding of 1/sqrt(2) components.
fn approx_quat(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - 1e-5
}

/// A take whose every direction vector is zero.
fn zero_take(name: &str, frames: usize) -> Take {
    let poses = PoseSequence::from_flat(vec![0.0; frames * FRAME_WIDTH], FRAME_WIDTH).unwrap();
    Take::new(name, poses)
}

// ============================================================================
// animate()
// ============================================================================

#[test]
fn silent_take_doubles_and_anchors() {
    let mut rig = SkeletonPose::upper_body();
    let result = animate(&mut rig, &zero_take("golden", 10), &PipelineOptions::default()).unwrap();

    // Zero channels resample to exact zeros, so the golden output is fully
    // predictable: arms rest, anchored joints accumulate a fixed step.
    assert_eq!(result.timing.frame_count, 20);
    assert!((result.timing.fps - 30.0).abs() < f32::EPSILON);
    assert!((result.timing.duration_secs() - 20.0 / 30.0).abs() < 1e-5);
    assert_eq!(result.clip.joint_count(), 8);
    assert_eq!(rig.keyframes().len(), 20 * 8);

    let wrist = result.clip.track(JointRole::WristR).unwrap();
    for (frame, rot) in wrist.rotations.iter().enumerate() {
        assert!(
            approx_quat(*rot, Quat::IDENTITY),
            "wrist frame {frame}: got {rot:?}"
        );
    }

    let nose_step = rotation_from_rest(refine_nose(Vec3::ZERO));
    let neck_step = rotation_from_rest(refine_neck(Vec3::ZERO));
    let mut nose_expected = Quat::IDENTITY;
    let mut neck_expected = Quat::IDENTITY;
    for frame in 0..20 {
        nose_expected *= nose_step;
        neck_expected *= neck_step;
        let nose = result.clip.track(JointRole::Nose).unwrap().rotations[frame];
        let neck = result.clip.track(JointRole::Neck).unwrap().rotations[frame];
        assert!(approx_quat(nose, nose_expected), "nose frame {frame}");
        assert!(approx_quat(neck, neck_expected), "neck frame {frame}");
    }
}

#[test]
fn upsample_disabled_keeps_frame_count() {
    let mut rig = SkeletonPose::upper_body();
    let options = PipelineOptions {
        upsample: false,
        ..PipelineOptions::default()
    };

    let result = animate(&mut rig, &zero_take("raw", 6), &options).unwrap();
    assert_eq!(result.timing.frame_count, 6);
    assert_eq!(rig.keyframes().len(), 6 * 8);
}

#[test]
fn frame_limit_caps_processed_frames() {
    let mut rig = SkeletonPose::upper_body();
    let options = PipelineOptions {
        frame_limit: Some(4),
        ..PipelineOptions::default()
    };

    // Five input frames upsample to ten; the limit keeps the first four.
    let result = animate(&mut rig, &zero_take("preview", 5), &options).unwrap();
    assert_eq!(result.timing.frame_count, 4);
    assert_eq!(rig.keyframes().len(), 4 * 8);
}

#[test]
fn short_take_fails_with_insufficient_frames() {
    let mut rig = SkeletonPose::upper_body();
    let outcome = animate(&mut rig, &zero_take("short", 4), &PipelineOptions::default());

    assert!(matches!(
        outcome,
        Err(MarionetteError::InsufficientFrames { frames: 4, .. })
    ));
    assert!(rig.keyframes().is_empty());
}

#[test]
fn malformed_take_commits_nothing() {
    let mut rig = SkeletonPose::upper_body();
    let poses = PoseSequence::from_flat(vec![0.0; 36], 6).unwrap();
    let outcome = animate(&mut rig, &Take::new("narrow", poses), &PipelineOptions::default());

    assert!(matches!(outcome, Err(MarionetteError::MalformedFrame(_))));
    assert!(rig.keyframes().is_empty());
}

// ============================================================================
// animate_batch()
// ============================================================================

#[test]
fn batch_isolates_failing_takes() {
    let mut rig = SkeletonPose::upper_body();
    let takes = [
        zero_take("a", 6),
        zero_take("b", 4),
        zero_take("c", 5),
    ];

    let results = animate_batch(&mut rig, &takes, &PipelineOptions::default(), &mut NoFinisher);

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(MarionetteError::InsufficientFrames { .. })
    ));
    assert!(results[2].is_ok(), "a bad take must not poison the next one");

    // The shared rig holds only the last successful take (5 -> 10 frames).
    assert_eq!(rig.keyframes().len(), 10 * 8);
}

struct CountingFinisher {
    names: Vec<String>,
}

impl Finisher for CountingFinisher {
    fn finish(&mut self, result: &TakeResult) -> marionette::Result<()> {
        self.names.push(result.name.clone());
        Ok(())
    }
}

#[test]
fn finisher_runs_once_per_successful_take() {
    let mut rig = SkeletonPose::upper_body();
    let takes = [zero_take("a", 6), zero_take("b", 4), zero_take("c", 5)];
    let mut finisher = CountingFinisher { names: Vec::new() };

    animate_batch(&mut rig, &takes, &PipelineOptions::default(), &mut finisher);
    assert_eq!(finisher.names, ["a", "c"]);
}

struct RejectingFinisher;

impl Finisher for RejectingFinisher {
    fn finish(&mut self, result: &TakeResult) -> marionette::Result<()> {
        Err(MarionetteError::MalformedFrame(format!(
            "rejected '{}'",
            result.name
        )))
    }
}

#[test]
fn failing_finisher_marks_take_failed_without_stopping() {
    let mut rig = SkeletonPose::upper_body();
    let takes = [zero_take("a", 5), zero_take("b", 5)];

    let results = animate_batch(
        &mut rig,
        &takes,
        &PipelineOptions::default(),
        &mut RejectingFinisher,
    );

    assert!(results.iter().all(std::result::Result::is_err));
    assert_eq!(results.len(), 2);
}

// ============================================================================
// RawTake and take files
// ============================================================================

#[test]
fn raw_take_selects_channel() {
    let raw: RawTake = serde_json::from_str(
        r#"{"human_dir_vec": [[0.1, 0.2, 0.3]],
            "out_dir_vec": [[0.4, 0.5, 0.6], [0.7, 0.8, 0.9]]}"#,
    )
    .unwrap();

    let human = raw.clone().into_take("demo", DirectionChannel::Human).unwrap();
    assert_eq!(human.poses.frame_count(), 1);
    assert_eq!(human.poses.as_flat(), &[0.1, 0.2, 0.3]);

    let output = raw.into_take("demo", DirectionChannel::Output).unwrap();
    assert_eq!(output.poses.frame_count(), 2);
    assert_eq!(output.poses.joint_vector(1, 0), Vec3::new(0.7, 0.8, 0.9));
}

#[test]
fn missing_channel_is_malformed() {
    let outcome = RawTake::default().into_take("empty", DirectionChannel::Human);
    match outcome {
        Err(MarionetteError::MalformedFrame(msg)) => {
            assert!(msg.contains("no frames"), "got: {msg}");
        }
        other => panic!("expected MalformedFrame, got {other:?}"),
    }
}

#[test]
fn channel_names_match_wire_format() {
    assert_eq!(
        serde_json::to_string(&DirectionChannel::Human).unwrap(),
        "\"human\""
    );
    assert_eq!(
        serde_json::to_string(&DirectionChannel::Output).unwrap(),
        "\"out\""
    );
    let parsed: DirectionChannel = serde_json::from_str("\"out\"").unwrap();
    assert_eq!(parsed, DirectionChannel::Output);
}

#[test]
fn take_files_load_in_name_order() {
    let dir = std::env::temp_dir().join(format!("marionette_takes_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("b.json"), r#"{"human_dir_vec": [[1.0, 0.0, 0.0]]}"#).unwrap();
    fs::write(dir.join("a.json"), r#"{"human_dir_vec": [[0.0, 1.0, 0.0]]}"#).unwrap();
    fs::write(dir.join("notes.txt"), "not a take").unwrap();

    let takes = load_takes(&dir, DirectionChannel::Human).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(takes.len(), 2, "non-json files must be ignored");
    assert_eq!(takes[0].name, "a");
    assert_eq!(takes[1].name, "b");
    assert_eq!(takes[0].poses.joint_vector(0, 0), Vec3::new(0.0, 1.0, 0.0));
}
