use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if commands::handle_admin_commands(&cli)? {
        return Ok(());
    }

    let cfg = services::storage::load_config(&cli.config)?;
    services::storage::validate_config(&cfg)?;
    commands::handle_runtime_commands(&cli, &cfg)
}
