use crate::domain::models::{CheckItem, DoctorReport};
use crate::services::storage::{load_config, validate_config};
use std::path::{Path, PathBuf};

/// Diagnose the runner's own setup, as opposed to the project's: is the
/// config there, does it parse and validate, can the entry command be found,
/// is there a HOME for the run journal.
pub fn setup_doctor(config_path: &str) -> DoctorReport {
    let mut checks = Vec::new();

    let exists = Path::new(config_path).exists();
    checks.push(CheckItem {
        name: "config_file".to_string(),
        status: if exists { "ok" } else { "missing" }.to_string(),
    });

    let cfg = if exists { load_config(config_path).ok() } else { None };
    checks.push(CheckItem {
        name: "config_parses".to_string(),
        status: match (exists, &cfg) {
            (false, _) => "missing",
            (true, Some(_)) => "ok",
            (true, None) => "invalid",
        }
        .to_string(),
    });

    checks.push(CheckItem {
        name: "suite_valid".to_string(),
        status: match &cfg {
            None => "missing",
            Some(c) if validate_config(c).is_ok() => "ok",
            Some(_) => "invalid",
        }
        .to_string(),
    });

    checks.push(CheckItem {
        name: "entry_command".to_string(),
        status: match cfg.as_ref().and_then(|c| c.entry.as_ref()) {
            None => "not_configured",
            Some(e) if command_resolvable(&e.command) => "ok",
            Some(_) => "missing",
        }
        .to_string(),
    });

    checks.push(CheckItem {
        name: "audit_home".to_string(),
        status: if std::env::var("HOME").is_ok() {
            "ok"
        } else {
            "missing"
        }
        .to_string(),
    });

    let all_ok = checks
        .iter()
        .all(|c| c.status == "ok" || c.status == "not_configured");
    DoctorReport {
        overall: if all_ok { "ok" } else { "needs_attention" }.to_string(),
        checks,
    }
}

fn command_resolvable(command: &str) -> bool {
    let p = Path::new(command);
    if p.components().count() > 1 {
        return p.exists();
    }
    std::env::var("PATH")
        .unwrap_or_default()
        .split(':')
        .any(|dir| PathBuf::from(dir).join(command).exists())
}

#[cfg(test)]
mod tests {
    use super::setup_doctor;

    #[test]
    fn missing_config_needs_attention() {
        let report = setup_doctor("./definitely-not-a-config.toml");
        assert_eq!(report.overall, "needs_attention");
        assert_eq!(report.checks[0].name, "config_file");
        assert_eq!(report.checks[0].status, "missing");
    }
}
