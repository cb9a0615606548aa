//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`] or [`health`].

pub mod health;
pub mod run;

use crate::cli::{Cli, Commands};
use crate::error::RelayError;

pub async fn dispatch(cli: Cli) -> Result<(), RelayError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(*args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  greeting-relay v{version}\n\n  \
         No command provided. To get started:\n\n    \
         greeting-relay run                                    Start the relay ($NAME_SERVICE_URL)\n    \
         greeting-relay run --name-service-url <URL>           Start against a specific name service\n    \
         greeting-relay health                                 Check a running instance\n    \
         greeting-relay --help                                 See all commands and options\n"
    );
}
