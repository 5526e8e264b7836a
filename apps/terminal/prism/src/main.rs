use prism::command::{Command, Flow, execute};
use prism::error::PrismError;
use prism::logger::initialize as LoggerInitialize;
use prism::{paths, view};

use client_core::config::{API_BASE_URL_ENV, AppConfig};
use client_core::ShellHandle;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, stdin, stdout};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), PrismError> {
    let log_dir = paths::log_dir()?;
    create_dir_all(&log_dir).map_err(|e| PrismError::Prism {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("PRISM terminal starting");
    info!("Log directory: {}", log_dir.display());

    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment from {}", path.display());
    }

    let config_dir = paths::config_dir()?;
    let mut config = AppConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!("Ignoring unusable config, using defaults: {e}");
        AppConfig::default()
    });
    config.apply_base_url_override(std::env::var(API_BASE_URL_ENV).ok());

    let handle = ShellHandle::from_config(&config).map_err(|e| PrismError::Core {
        message: format!("Failed to start session: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    prompt_loop(&handle).await?;

    config.ui = handle.snapshot().await.preferences();
    if let Err(e) = config.save(&config_dir) {
        warn!("Failed to save preferences: {e}");
    }

    info!("PRISM terminal stopped");
    Ok(())
}

async fn prompt_loop(handle: &ShellHandle) -> Result<(), PrismError> {
    let mut lines = BufReader::new(stdin()).lines();
    let mut out = stdout();

    write_page(&mut out, &view::render(&handle.snapshot().await)).await?;

    loop {
        let line = lines.next_line().await.map_err(|e| PrismError::Prism {
            message: format!("Failed to read input: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // EOF behaves like :quit
        let Some(line) = line else {
            return Ok(());
        };

        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match execute(handle, command).await {
            Flow::Quit => return Ok(()),
            Flow::Continue(feedback) => {
                let mut page = String::new();
                if let Some(feedback) = feedback {
                    page.push_str(&feedback);
                    page.push_str("\n\n");
                }
                page.push_str(&view::render(&handle.snapshot().await));
                write_page(&mut out, &page).await?;
            }
        }
    }
}

async fn write_page(out: &mut tokio::io::Stdout, page: &str) -> Result<(), PrismError> {
    let location = ErrorLocation::from(Location::caller());
    let text = format!("\n{page}\n› ");

    out.write_all(text.as_bytes())
        .await
        .map_err(|e| PrismError::Prism {
            message: format!("Failed to write output: {e}"),
            location,
        })?;
    out.flush().await.map_err(|e| PrismError::Prism {
        message: format!("Failed to flush output: {e}"),
        location,
    })
}
