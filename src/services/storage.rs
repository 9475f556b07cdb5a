use crate::domain::models::ConfigFile;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config not found: {0} (run `presmoke init` to scaffold one)")]
    NotFound(String),
    #[error("runtime-mode variable name is empty")]
    EmptyModeVar,
    #[error("duplicate required key: {0}")]
    DuplicateKey(String),
    #[error("entry command is empty")]
    EmptyEntryCommand,
}

pub fn load_config(path: &str) -> anyhow::Result<ConfigFile> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(ConfigError::NotFound(path.to_string()).into());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(toml::from_str(&raw)?)
}

pub fn validate_config(cfg: &ConfigFile) -> anyhow::Result<()> {
    if cfg.env.mode_var.trim().is_empty() {
        return Err(ConfigError::EmptyModeVar.into());
    }
    // The mode var counts: listing it again under `required` would register
    // the same check twice.
    let mut seen = HashSet::new();
    seen.insert(cfg.env.mode_var.clone());
    for key in &cfg.env.required {
        if !seen.insert(key.clone()) {
            return Err(ConfigError::DuplicateKey(key.clone()).into());
        }
    }
    if let Some(entry) = &cfg.entry {
        if entry.command.trim().is_empty() {
            return Err(ConfigError::EmptyEntryCommand.into());
        }
    }
    Ok(())
}

pub fn write_default_config(path: &str) -> anyhow::Result<()> {
    let p = Path::new(path);
    if p.exists() {
        anyhow::bail!("config already exists: {}", path);
    }
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(p, DEFAULT_CONFIG)?;
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# presmoke suite configuration.
# `presmoke run` executes the checks below in declaration order.

[suite]
name = "Project Setup - Smoke Test"

[env]
# Runtime-mode variable that must be defined before deeper tests run.
mode_var = "APP_ENV"
# Additional required keys; each one becomes its own env check.
required = []

# Uncomment to probe the project's entry point during the suite.
# [entry]
# command = "target/debug/app"
# args = ["--version"]
"#;

fn audit_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/presmoke/runs.jsonl"))
}

/// Best-effort run journal. Never fails the command that called it.
pub fn audit(action: &str, data: serde_json::Value) {
    let Ok(path) = audit_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_ts(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_ts() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::validate_config;
    use crate::domain::models::{ConfigFile, EntrySection};

    #[test]
    fn empty_config_uses_documented_defaults() {
        let cfg: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(cfg.suite.name, "Project Setup - Smoke Test");
        assert_eq!(cfg.env.mode_var, "APP_ENV");
        assert!(cfg.env.required.is_empty());
        assert!(cfg.entry.is_none());
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn scaffold_parses_and_validates() {
        let cfg: ConfigFile = toml::from_str(super::DEFAULT_CONFIG).unwrap();
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn duplicate_required_key_is_rejected() {
        let cfg: ConfigFile = toml::from_str(
            r#"
[env]
required = ["DB_URL", "DB_URL"]
"#,
        )
        .unwrap();
        let err = validate_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("duplicate required key"));
    }

    #[test]
    fn mode_var_listed_in_required_is_rejected() {
        let cfg: ConfigFile = toml::from_str(
            r#"
[env]
mode_var = "APP_ENV"
required = ["APP_ENV"]
"#,
        )
        .unwrap();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn empty_mode_var_is_rejected() {
        let cfg: ConfigFile = toml::from_str(
            r#"
[env]
mode_var = ""
"#,
        )
        .unwrap();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn empty_entry_command_is_rejected() {
        let cfg = ConfigFile {
            entry: Some(EntrySection {
                command: "  ".to_string(),
                args: vec![],
            }),
            ..ConfigFile::default()
        };
        assert!(validate_config(&cfg).is_err());
    }
}
