//! Subcommand implementations.
//!
//! Commands take their reader and writer as parameters so tests can drive
//! them without a terminal.

pub mod config;
pub mod generate;
pub mod key;

use crate::cli::{Command, ConfigCommand, KeyCommand};
use crate::context::PlannerContext;
use crate::error::PlannerError;

use std::io::{BufRead, Write};

use log::info;

pub async fn run(
    command: Command,
    context: &PlannerContext,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), PlannerError> {
    match command {
        Command::Key(KeyCommand::Status) => {
            key::status(&mut context.credential_store(), out)?;
        }
        Command::Key(KeyCommand::Set { key: raw }) => {
            key::set(&mut context.credential_store(), raw, input, out).await?;
        }
        Command::Key(KeyCommand::Remove) => {
            key::remove(&mut context.credential_store(), out)?;
        }
        Command::Generate(args) => {
            generate::run(
                &mut context.credential_store(),
                &context.pipeline(),
                &args,
                out,
            )
            .await?;
        }
        Command::Config(ConfigCommand::Show) => {
            config::show(&context.config, out)?;
        }
        Command::Config(ConfigCommand::Set(args)) => {
            config::set(&context.config_dir, &context.config, &args, out)?;
        }
    }
    Ok(())
}

/// Print a failed command as one `error: ...` line.
///
/// The full error, with its source location, goes to the log file only;
/// the terminal shows warnings and above by default.
pub fn report_failure(error: &PlannerError, err_out: &mut impl Write) {
    info!("Command failed: {error}");
    // Nothing sensible is left to do if stderr itself is gone
    let _ = writeln!(err_out, "error: {}", error.user_message());
}
