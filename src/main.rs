// src/main.rs
use std::process::ExitCode;

use anyhow::Context;
use log::{error, info};

use filetrap::cli;
use filetrap::core::business::{run_business_loop, WorkingPaths};
use filetrap::core::daemon::daemonize;
use filetrap::utils::logger;

fn main() -> ExitCode {
    logger::init();

    info!(
        "filetrap v{} - standard handle pitfall demo",
        env!("CARGO_PKG_VERSION")
    );

    let status = match run() {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            -1
        }
    };

    info!("exit with {}, bye", status);
    logger::shutdown();

    if status == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run() -> anyhow::Result<()> {
    let options =
        cli::parse_args(std::env::args().skip(1)).context("command line parsing failed")?;
    logger::apply_threshold(options.log_level);

    // Console mode skips the fork entirely.
    if options.run_as_daemon {
        daemonize(options.close_std_handles).context("run as daemon failed")?;
    }

    run_business_loop(&WorkingPaths::default())
}
