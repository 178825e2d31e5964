mod app;
mod artifact;
mod config;
mod error;
mod fetch;
mod jenkins;
mod util;

use crate::app::App;
use crate::artifact::filter::ArtifactFilter;
use crate::config::cli_config::Args;
use crate::error::Error;
use crate::fetch::{FATAL_EXIT_STATUS, Outcome, fetch_artifacts};
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let finished = run(Args::parse()).await;
    match &finished {
        Ok(Outcome::BuildNotSuccessful { result }) => {
            error!("Build is not successful ({result:?}), skipping downloads");
        }
        Ok(Outcome::Completed(_)) => {}
        Err(e) => error!("{e}"),
    }

    ExitCode::from(exit_status(&finished))
}

/// The build result decides the status; a build that could not be looked up at all
/// exits with [`FATAL_EXIT_STATUS`].
fn exit_status(finished: &Result<Outcome, Error>) -> u8 {
    match finished {
        Ok(outcome) => outcome.exit_status(),
        Err(_) => FATAL_EXIT_STATUS,
    }
}

async fn run(args: Args) -> Result<Outcome, Error> {
    // Compile the pattern before touching the network
    let filter = ArtifactFilter::new(args.pattern.as_deref())?;
    let app = App::new(args.output_dir, args.jobs)?;

    fetch_artifacts(&app, &args.url, &filter).await
}
