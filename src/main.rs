//! image-resizer - Entry Point
//!
//! Wires configuration, logging, the filesystem store and the resize service
//! together behind a small command-line front end.

use log::{debug, info};
use std::io;
use std::process::ExitCode;

use image_resizer::commands::{handle_command, parse_command};
use image_resizer::config::AppConfig;
use image_resizer::error::handlers::{error_to_exit_code, handle_error};
use image_resizer::utils::logging::setup_logging;
use image_resizer::{FsStore, ResizeService, ResizerError};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            eprintln!("{}", e);
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

async fn run() -> Result<(), ResizerError> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            setup_logging("info");
            return Err(e.into());
        }
    };
    setup_logging(&config.logging.level);
    debug!("Loaded configuration: {:?}", config);

    let store = FsStore::new(config.storage.root_path())?
        .with_max_object_size(config.storage.max_object_size_bytes());
    let service = ResizeService::new(store);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_command(&args);
    info!("Running {:?}", command);

    // The store does blocking file I/O
    tokio::task::spawn_blocking(move || {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        handle_command(&service, command, &mut out)
    })
    .await
    .map_err(|e| ResizerError::IoError(io::Error::other(e)))?
}
