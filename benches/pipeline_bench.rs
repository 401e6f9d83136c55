//! Full-pipeline benchmark over a synthetic capture take.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use marionette::{
    animate, resample, PipelineOptions, PoseSequence, SkeletonPose, Take, FRAME_WIDTH,
};

/// A smooth synthetic take: every channel follows its own sine curve.
fn synthetic_take(frames: usize) -> Take {
    let mut data = Vec::with_capacity(frames * FRAME_WIDTH);
    for frame in 0..frames {
        for dim in 0..FRAME_WIDTH {
            let phase = frame as f32 * 0.11 + dim as f32 * 0.37;
            data.push(phase.sin());
        }
    }
    Take::new("bench", PoseSequence::from_flat(data, FRAME_WIDTH).unwrap())
}

fn bench_resample(c: &mut Criterion) {
    let take = synthetic_take(120);
    c.bench_function("resample_120_frames", |b| {
        b.iter(|| resample(black_box(&take.poses)).unwrap());
    });
}

fn bench_animate(c: &mut Criterion) {
    let take = synthetic_take(120);
    let options = PipelineOptions::default();
    c.bench_function("animate_120_frames", |b| {
        b.iter(|| {
            let mut rig = SkeletonPose::upper_body();
            animate(&mut rig, black_box(&take), &options).unwrap()
        });
    });
}

criterion_group!(benches, bench_resample, bench_animate);
criterion_main!(benches);
