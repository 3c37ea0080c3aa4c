//! Renders a gaussian point cloud to `heatmap.png`.
//!
//! Run with `cargo run --example render_random`, optionally with
//! `RUST_LOG=debug` for render diagnostics.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;

use heatmap_core::Heatmap;
use heatmap_render::{png, render_with_scheme, PaletteRegistry};

const WIDTH: usize = 512;
const HEIGHT: usize = 384;
const POINTS: usize = 10_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let x_dist = Normal::new(WIDTH as f64 / 2.0, WIDTH as f64 / 8.0)?;
    let y_dist = Normal::new(HEIGHT as f64 / 2.0, HEIGHT as f64 / 8.0)?;

    let points: Vec<(i32, i32)> = (0..POINTS)
        .map(|_| {
            (
                x_dist.sample(&mut rng) as i32,
                y_dist.sample(&mut rng) as i32,
            )
        })
        .collect();

    let mut map = Heatmap::new(WIDTH, HEIGHT)?;
    map.add_points(&points);
    println!("accumulated {POINTS} points, peak density {:.1}", map.max());

    let registry = PaletteRegistry::builtin();
    let spectral = registry
        .get("Spectral")
        .ok_or("Spectral palette not registered")?;

    let pixels = render_with_scheme(&map, spectral);
    let encoded = png::encode_rgba(&pixels, WIDTH, HEIGHT)?;
    std::fs::write("heatmap.png", &encoded)?;
    println!("wrote heatmap.png ({} bytes)", encoded.len());

    Ok(())
}
