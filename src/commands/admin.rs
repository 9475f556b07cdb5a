use crate::cli::{Cli, Commands};
use crate::services::doctor::setup_doctor;
use crate::services::output::{print_one, print_report, render_doctor_text};
use crate::services::storage::{audit, load_config, validate_config, write_default_config};

/// Handle commands that must work without a loaded config. Returns false when
/// the command belongs to the runtime layer.
pub fn handle_admin_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Init => {
            write_default_config(&cli.config)?;
            print_one(cli.json, &cli.config, |p| format!("wrote {}", p))?;
        }
        Commands::Validate => {
            let cfg = load_config(&cli.config)?;
            validate_config(&cfg)?;
            print_one(cli.json, "valid", |_| "config valid".to_string())?;
        }
        Commands::Doctor => {
            let report = setup_doctor(&cli.config);
            audit(
                "doctor",
                serde_json::json!({"overall": report.overall}),
            );
            print_report(cli.json, report.overall == "ok", &report, |r| {
                render_doctor_text(r)
            })?;
        }
        Commands::Run | Commands::List => return Ok(false),
    }

    Ok(true)
}
