//! Stress Eliminator entry point
//!
//! Loads settings and runs the game. Without a windowing backend the
//! native build plays itself headlessly and logs how the run went.

use std::time::{SystemTime, UNIX_EPOCH};

use stress_eliminator::platform::HeadlessPlatform;
use stress_eliminator::{Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Stress Eliminator starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!(
        "seed {}, {}x{} @ {} fps, demo helper {}",
        seed,
        settings.window_width,
        settings.window_height,
        settings.target_fps,
        settings.demo_helper.as_str()
    );

    let platform = HeadlessPlatform::new(settings.demo_helper, settings.frame_ms());
    let mut game = Game::new(settings, seed, platform);
    let summary = game.run();

    log::info!(
        "run finished in {:?} after {} frames ({:.1} s simulated)",
        summary.final_phase,
        summary.frames,
        summary.elapsed_ms as f64 / 1000.0
    );
    log::info!(
        "{} projectile hits, {} enemies touched",
        game.state.totals.hits,
        game.state.totals.contacts
    );
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
