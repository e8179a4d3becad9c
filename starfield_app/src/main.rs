//! Shooting star demo application
//!
//! Runs the transient object lifecycle headless: stars are loaded from a glTF
//! model every couple of seconds, fade out at the end of their life and are
//! removed, with scene changes reported through the log.
//!
//! Usage: `starfield [config.toml|config.ron] [seconds]`

mod headless;

use std::env;
use std::time::Duration;

use starfield_engine::foundation::logging;
use starfield_engine::prelude::*;

use headless::{FixedRateDisplay, LogRenderer};

const DEFAULT_CONFIG_PATH: &str = "starfield.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let run_for = args
        .next()
        .map(|seconds| seconds.parse::<u64>().map(Duration::from_secs))
        .transpose()?;

    log::info!("Starting starfield demo with config {}", config_path);
    let config = StarfieldConfig::load_or_default(&config_path)?;

    let mut render_loop = RenderLoop::new(
        &config,
        SystemClock::new(),
        SimpleSceneGraph::new(),
        Box::new(GltfModelLoader::new()),
        Box::new(LogRenderer::default()),
    )?;

    let mut display = FixedRateDisplay::new(config.engine.target_fps, run_for);
    match render_loop.run(&mut display) {
        Ok(frames) => {
            let stats = render_loop.spawn_stats();
            log::info!(
                "Starfield demo finished: {} frames, {} stars spawned, {} failed loads",
                frames,
                stats.registered,
                stats.failed
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Starfield demo failed: {}", e);
            Err(e.into())
        }
    }
}
