//! Performance benchmarks for artifact scoring and video aggregation

use artifact_detect::features::ArtifactScorer;
use artifact_detect::ml::PassthroughExtractor;
use artifact_detect::video::FrameSequence;
use artifact_detect::{DetectionConfig, ImageJudge, PixelBuffer, SeededSource, VideoAggregator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokio_util::sync::CancellationToken;

fn synthetic_image(width: u32, height: u32) -> PixelBuffer {
    let data: Vec<u8> = (0..width * height)
        .flat_map(|i| {
            let v = (i % 256) as u8;
            [v, v.wrapping_mul(3), 255 - v, 255]
        })
        .collect();
    PixelBuffer::from_raw(width, height, data).expect("valid synthetic image")
}

fn bench_score_image(c: &mut Criterion) {
    let pixels = synthetic_image(512, 512);
    let mut scorer = ArtifactScorer::new(SeededSource::from_seed_u64(7));

    c.bench_function("score_512x512", |b| {
        b.iter(|| scorer.score(black_box(&pixels)));
    });
}

fn bench_analyze_video(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    // 10 seconds at 2 fps, 320x180
    let frames: Vec<PixelBuffer> = (0..20).map(|_| synthetic_image(320, 180)).collect();

    c.bench_function("analyze_video_10s", |b| {
        b.to_async(&rt).iter(|| {
            let frames = frames.clone();
            async move {
                let mut source = FrameSequence::new(frames, 2.0).expect("valid fps");
                let judge = ImageJudge::new(
                    PassthroughExtractor::new(),
                    SeededSource::from_seed_u64(7),
                    DetectionConfig::default(),
                );
                let mut aggregator = VideoAggregator::new(judge);
                aggregator
                    .analyze(&mut source, 1.0, &CancellationToken::new())
                    .await
                    .expect("analysis succeeds")
            }
        });
    });
}

criterion_group!(benches, bench_score_image, bench_analyze_video);
criterion_main!(benches);
