//! Example: Analyze a single image file
//!
//! Usage: `cargo run --example analyze_file -- <image> [seed]`

use artifact_detect::io::decoder::decode_image_file;
use artifact_detect::ml::PassthroughExtractor;
use artifact_detect::{DetectionConfig, ImageJudge, SeededSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: analyze_file <image> [seed]")?;
    let source = match args.next() {
        Some(seed) => SeededSource::from_seed_u64(seed.parse()?),
        None => SeededSource::from_entropy(),
    };

    let mut judge = ImageJudge::new(PassthroughExtractor::new(), source, DetectionConfig::default());

    // Decode failures still produce a (neutral) verdict
    let verdict = match decode_image_file(&path) {
        Ok(pixels) => judge.judge(&pixels, Some(&path)).await,
        Err(e) => {
            eprintln!("warning: {}", e);
            artifact_detect::Verdict::neutral()
        }
    };

    println!("{}", verdict.headline());
    println!("  Explanation: {}", verdict.explanation);
    println!("  Confidence: {:.2}", verdict.confidence);
    if let Some(details) = &verdict.details {
        println!("  Color distribution: {:.3}", details.color_distribution());
        println!("  Edge patterns: {:.3}", details.edge_patterns());
        println!("  Facial anomalies: {:.3}", details.facial_anomalies());
        println!("  Texture inconsistencies: {:.3}", details.texture_inconsistencies());
    }
    println!("{}", serde_json::to_string_pretty(&verdict)?);

    Ok(())
}
