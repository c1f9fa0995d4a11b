//! SeeLabel CLI
//!
//! Labels an image for a target object and writes the composited result.
//!
//! # Usage
//!
//! ```bash
//! seelabel "https://example.com/lunch.jpg" "hot dog" \
//!     --endpoint http://localhost:9000/detect-labels \
//!     --font fonts/ariblk.ttf \
//!     --output labeled.png
//! ```

use clap::Parser;
use seelabel::recognition::HttpRecognitionBackend;
use seelabel::seelabel::{
    DEFAULT_COLUMNS, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_FONT_SIZE, SeeLabelBuilder,
};
use seelabel::utils::init_tracing;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "seelabel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Overlay an object-detection label onto an image", long_about = None)]
struct Args {
    /// URL or local file path of the image to label
    source: String,

    /// Name of the object to search for
    query: String,

    /// Recognition backend detect-labels endpoint
    #[arg(long)]
    endpoint: String,

    /// Path to the caption font (TTF/OTF)
    #[arg(long)]
    font: PathBuf,

    /// Caption font pixel size
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    font_size: f32,

    /// Object-level confidence threshold
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    confidence: f32,

    /// Caption column width
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Where to write the labeled image
    #[arg(short, long, default_value = "labeled.png")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let backend = HttpRecognitionBackend::new(&args.endpoint)?;
    let pipeline = SeeLabelBuilder::new(Box::new(backend))
        .font_path(&args.font)
        .font_size(args.font_size)
        .columns(args.columns)
        .confidence_threshold(args.confidence)
        .build()?;

    let outcome = pipeline.label_image(&args.source, &args.query)?;
    info!(found = outcome.is_found(), "labeling complete");
    println!("{outcome}");

    outcome.image.save(&args.output)?;
    info!(output = %args.output.display(), "saved labeled image");
    Ok(())
}
