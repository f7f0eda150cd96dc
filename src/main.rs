//! Breakout entry point
//!
//! Sets up logging and settings, then hands control to the window loop.

use breakout::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout starting...");

    let settings = Settings::load();
    if let Err(e) = breakout::platform::run(settings) {
        log::error!("Fatal: {e}");
        std::process::exit(1);
    }
}
