use crate::output::OutputArgs;

/// Main CLI structure
#[derive(clap::Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct AppCli {
    #[command(subcommand)]
    pub command: AppCommands,
    #[clap(flatten)]
    pub conn: ConnectionArgs,
}

/// Available CLI commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum AppCommands {
    /// Deployment history operations
    #[clap(aliases = &["dep", "d"])]
    Deployments {
        #[command(subcommand)]
        opt: DeploymentOperation,
    },
    /// Context management operations
    #[clap(aliases = &["ctx"])]
    Context {
        #[command(subcommand)]
        opt: ContextOperation,
    },
}

/// Deployment operation commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum DeploymentOperation {
    /// Retrieve the source used for a deployment
    #[clap(aliases = &["src", "s"])]
    Source {
        /// Application name, optionally namespace-qualified as NAMESPACE/NAME
        name: String,
        /// Deployment history ID
        deployment_id: String,
        /// Namespace, used when the application name is not qualified
        #[arg(long, default_value = "")]
        namespace: String,
        #[clap(flatten)]
        output: OutputArgs,
    },
}

/// Context operation commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum ContextOperation {
    /// Configure connection settings
    #[clap(aliases = &["s", "update"])]
    Set {
        /// Context name (defaults to current)
        name: Option<String>,
        /// Management service base URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Display current configuration
    #[clap(aliases = &["g"])]
    Get,
    /// Switch between contexts
    Select {
        /// Context name to switch to
        name: String,
    },
}

/// Connection configuration
#[derive(clap::Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Management service base URL (overrides the current context)
    #[arg(short, long, global = true)]
    pub server: Option<String>,
}
