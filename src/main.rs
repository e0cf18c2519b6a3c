//! # pawfetch Main Entry Point
//!
//! Fetches one cat or dog picture description and prints it.

use anyhow::Result;
use pawfetch::{cmd_args::CommandLineArgs, config, AppController, Phase};
use std::io::Write;
use tracing_subscriber::{filter::Directive, fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.verbose());

    let profile_path = config::get_profile_path();
    let profile = config::load_profile(cmd_args.profile(), &profile_path)?;
    let controller = AppController::new(&profile)?;

    let mut stdout = std::io::stdout().lock();
    let phase = controller.run(cmd_args.command(), &mut stdout).await?;
    stdout.flush()?;

    if phase == Phase::Failure {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing_subscriber(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(format!(
        "{}_LOG_LEVEL",
        env!("CARGO_PKG_NAME").to_uppercase()
    ))
    .unwrap_or_else(|_| EnvFilter::new(default_level));

    let filter = ["reqwest", "hyper", "hyper_util", "rustls", "tokio"]
        .into_iter()
        .filter_map(|target| format!("{target}=warn").parse::<Directive>().ok())
        .fold(filter, EnvFilter::add_directive);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
