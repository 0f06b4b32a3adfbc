//! `swatches`: writes a 60×240 preview of each ring's color progression.
//!
//! Usage: `swatches [out.png]` (default `sample.png`).

use anyhow::{Context, Result};

use rings_engine::logging::{init_logging, LoggingConfig};
use rings_engine::rings::RingsConfig;
use rings_engine::swatch::render_swatches;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out = std::env::args().nth(1).unwrap_or_else(|| "sample.png".to_string());
    let config = RingsConfig::default();

    let surface = render_swatches(&config)?;
    surface
        .save_png(&out)
        .with_context(|| format!("failed to save swatches to {out}"))?;

    log::info!("wrote {out}");
    Ok(())
}
