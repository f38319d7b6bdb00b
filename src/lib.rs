mod client;
mod commands;
mod config;
mod history;
mod models;
mod output;
mod types;

use std::process;

pub use client::{ClientError, HttpClient};
pub use history::{HistoryError, find_revision_history};
pub use models::{
    AppMetadata, AppStatus, Application, ApplicationSource, RevisionHistory,
};
pub use output::{FormatError, OutputArgs, OutputFormat, print_output};
pub use types::{
    AppCli, AppCommands, ConnectionArgs, ContextOperation, DeploymentOperation,
};

pub async fn run(cli: AppCli) {
    match &cli.command {
        AppCommands::Deployments { opt } => {
            if let Err(e) =
                commands::handle_deployment_command(opt, &cli.conn).await
            {
                eprintln!("Deployments command failed: {}", e);
                process::exit(1);
            }
        }
        AppCommands::Context { opt } => {
            if let Err(e) = commands::handle_context_command(opt).await {
                eprintln!("Context command failed: {}", e);
                process::exit(1);
            }
        }
    }
}
