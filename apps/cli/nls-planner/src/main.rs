use nls_planner::cli::Cli;
use nls_planner::commands;
use nls_planner::context::PlannerContext;
use nls_planner::error::PlannerError;
use nls_planner::logger::{initialize as LoggerInitialize, terminal_level};

use std::io::{stderr, stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::report_failure(&e, &mut stderr().lock());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), PlannerError> {
    let context = PlannerContext::load(cli.config_dir.as_deref())?;

    // Logger needs the data dir, so config errors above go to stderr only
    LoggerInitialize(&context.data_dir.path, terminal_level(cli.verbose))?;
    info!("nls-planner {} starting", env!("CARGO_PKG_VERSION"));

    let mut input = stdin().lock();
    let mut out = stdout().lock();
    commands::run(cli.command, &context, &mut input, &mut out).await
}
