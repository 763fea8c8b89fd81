//! mo-pong entry point

use std::process::ExitCode;

use mo_pong::{Settings, platform};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("mo-pong starting...");

    let settings = Settings::load();
    match platform::run(settings) {
        Ok(()) => {
            log::info!("mo-pong exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("mo-pong failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
