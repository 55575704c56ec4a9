//! Reconstructs a bored bushing from a synthetic two-view drawing and prints
//! the resulting solids as JSON.
//!
//! Usage:
//! ```text
//! cargo run --example reconstruct                     # default tolerances
//! cargo run --example reconstruct -- config.json      # tolerances from a file
//! ```

use std::error::Error;

use image::{GrayImage, Luma};
use imageproc::drawing::draw_hollow_circle_mut;
use revolvis::geometry::{CircleFit, LineSegment};
use revolvis::{DrawingViews, Projection, Reconstruct, ReconstructionConfig};

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for revolvis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=revolvis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("revolvis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ReconstructionConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => ReconstructionConfig {
            coord_tolerance: 35.0,
            ..ReconstructionConfig::default()
        },
    };

    let views = bushing();
    let groups = Reconstruct::new(&views, &config).execute()?;
    println!("{}", serde_json::to_string_pretty(&groups)?);
    Ok(())
}

/// Top view with outer wall and bore, side view with both silhouettes.
fn bushing() -> DrawingViews {
    let mut top = GrayImage::new(240, 160);
    draw_hollow_circle_mut(&mut top, (120, 70), 50, Luma([255]));
    draw_hollow_circle_mut(&mut top, (120, 70), 30, Luma([255]));

    let xz = Projection::new(
        Some(top),
        [(120.0, 70.0, 50.0), (120.0, 70.0, 30.0)]
            .into_iter()
            .filter_map(|(x, y, r)| CircleFit::new(x, y, r).ok())
            .collect(),
        Vec::new(),
    );
    let zy = Projection::new(
        None,
        Vec::new(),
        vec![
            LineSegment::new(70.0, 0.0, 70.0, 100.0),
            LineSegment::new(170.0, 0.0, 170.0, 100.0),
            LineSegment::new(90.0, 20.0, 90.0, 80.0),
            LineSegment::new(150.0, 20.0, 150.0, 80.0),
        ],
    );
    DrawingViews { xz, zy }
}
