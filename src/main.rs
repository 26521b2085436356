use log::*;
use service::{config::Config, logging::Logger, AppState};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::new();

    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
        return ExitCode::FAILURE;
    }

    info!(
        "Starting random number stream on {}, one event every {:?}",
        config.server_address(),
        config.tick_interval()
    );

    let app_state = AppState::new(config);

    match web::init_server(app_state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
