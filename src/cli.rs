use clap::{Parser, Subcommand};

pub const DEFAULT_CONFIG_PATH: &str = "smoke.toml";

#[derive(Parser, Debug)]
#[command(name = "presmoke", version, about = "Project setup smoke check runner")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Path to the smoke suite config"
    )]
    pub config: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the smoke suite and exit non-zero if any check fails.
    Run,
    /// List the checks the current config produces, without running them.
    List,
    /// Validate the config file.
    Validate,
    /// Diagnose the runner's own setup.
    Doctor,
    /// Scaffold a default config file.
    Init,
}
