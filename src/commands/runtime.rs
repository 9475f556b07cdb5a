use crate::cli::{Cli, Commands};
use crate::domain::models::ConfigFile;
use crate::services::environ::EnvSnapshot;
use crate::services::output::{print_out, print_report, render_suite_text};
use crate::services::storage::audit;
use crate::services::suite::{plan_checks, run_suite};

pub fn handle_runtime_commands(cli: &Cli, cfg: &ConfigFile) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Run => {
            let env = EnvSnapshot::from_process();
            let report = run_suite(cfg, &env);
            audit(
                "run",
                serde_json::json!({
                    "suite": report.suite,
                    "overall": report.overall,
                    "failed": report.failed
                }),
            );
            let ok = report.overall == "ok";
            print_report(cli.json, ok, &report, |r| render_suite_text(r))?;
            if !ok {
                // Report first, then the exit code the caller keys off.
                std::process::exit(1);
            }
        }
        Commands::List => {
            print_out(cli.json, &plan_checks(cfg), |c| {
                format!("{}\t{}\t{}", c.name, c.kind, c.subject)
            })?;
        }
        Commands::Validate | Commands::Doctor | Commands::Init => {
            unreachable!("handled before config loading")
        }
    }

    Ok(())
}
