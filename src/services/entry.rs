use crate::domain::models::{CheckReport, EntrySection};
use crate::services::suite::{mismatch, pass};

/// Verify the configured entry point initializes without error.
///
/// With no `[entry]` section the check passes trivially: the embedding
/// project has not named an entry point, so nothing is loaded. With one, the
/// command is spawned and any spawn error or non-success exit is reported as
/// a mismatch.
pub fn entry_check(entry: Option<&EntrySection>) -> CheckReport {
    let Some(entry) = entry else {
        return pass("entry");
    };
    match probe(entry) {
        Ok(()) => pass("entry"),
        Err(detail) => mismatch("entry", "entry loads without error", &detail),
    }
}

fn probe(entry: &EntrySection) -> Result<(), String> {
    let status = std::process::Command::new(&entry.command)
        .args(&entry.args)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status();
    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(s.to_string()),
        Err(e) => Err(format!("spawn failed: {}", e)),
    }
}
