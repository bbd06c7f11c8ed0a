//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `flagreq` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit status
//!
//! All request handling is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::process;

use flagreq::config::normalize_args;
use flagreq::initialization::init_logger_with;
use flagreq::{execute_request, Opt, RequestSpec};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse_from(normalize_args(std::env::args_os()));

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let spec = RequestSpec::from(opt);
    let prints_to_stdout = spec.output_path.is_none();

    match run(spec).await {
        Ok(text) => {
            if prints_to_stdout {
                print!("{text}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("flagreq error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(spec: RequestSpec) -> Result<String> {
    if let Err(e) = spec.validate() {
        error!("{}: {}", e.kind(), e);
        return Err(e).context("Invalid request configuration");
    }

    match execute_request(spec).await {
        Ok(text) => Ok(text),
        Err(e) if e.is_pre_network() => {
            error!("{}: {}", e.kind(), e);
            Err(e).context("Request not sent")
        }
        Err(e) => {
            error!("{}: {}", e.kind(), e);
            Err(e).context("Request failed")
        }
    }
}
