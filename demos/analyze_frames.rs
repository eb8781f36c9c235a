//! Example: Treat a list of image files as video frames and aggregate them
//!
//! Usage: `cargo run --example analyze_frames -- <fps> <frame1> [frame2 ...]`
//!
//! Press Ctrl-C to cancel; frames analyzed so far are still reported.

use artifact_detect::io::decoder::decode_image_file;
use artifact_detect::ml::PassthroughExtractor;
use artifact_detect::video::FrameSequence;
use artifact_detect::{DetectionConfig, ImageJudge, SeededSource, VideoAggregator};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let fps: f64 = args
        .next()
        .ok_or("usage: analyze_frames <fps> <frame>...")?
        .parse()?;
    let frames = args
        .map(|path| decode_image_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut source = FrameSequence::new(frames, fps)?;
    let judge = ImageJudge::new(
        PassthroughExtractor::new(),
        SeededSource::from_entropy(),
        DetectionConfig::default(),
    );
    let mut aggregator = VideoAggregator::new(judge);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let analysis = aggregator.analyze_default(&mut source, &cancel).await?;

    for frame in &analysis.frames {
        println!(
            "  [{}] {:>3}%  {:<20} {}",
            frame.timestamp(),
            frame.ai_probability,
            frame.label().as_str(),
            frame.explanation
        );
    }

    let summary = &analysis.summary;
    println!("Overall verdict: {}", summary.describe());
    println!("Total frames analyzed: {}", summary.total_frames);
    println!("AI-generated frames: {} ({}%)", summary.ai_frames, summary.ai_percentage);
    println!(
        "Suspicious frames: {} ({}%)",
        summary.suspicious_frames, summary.suspicious_percentage
    );
    if let Some(frame) = analysis.highlighted() {
        println!("Highlighted frame: {} ({}%)", frame.timestamp(), frame.ai_probability);
    }
    if analysis.cancelled {
        println!("(cancelled before all frames were analyzed)");
    }

    Ok(())
}
