//! `activity`: renders the rings to a PNG file, or serves them over HTTP.

mod args;
mod progress;
mod server;

use std::sync::Arc;

use anyhow::{Context, Result};

use rings_engine::logging::{init_logging, LoggingConfig};
use rings_engine::paint::Color;
use rings_engine::rings::{RingsCanvas, RingsConfig, DEFAULT_IMAGE_SIZE};

use args::{Args, USAGE};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = RingsConfig::default();

    if args.http {
        let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
        return runtime.block_on(server::serve(args.addr, Arc::new(config)));
    }

    let mut canvas = RingsCanvas::new(&config, DEFAULT_IMAGE_SIZE, Color::black())?;
    canvas.draw_activity(&args.values);
    canvas
        .save_png(&args.out_path)
        .with_context(|| format!("failed to save rings to {}", args.out_path.display()))?;

    log::info!("wrote {}", args.out_path.display());
    Ok(())
}
