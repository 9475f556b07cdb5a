use crate::domain::models::{CheckDescriptor, CheckReport, ConfigFile, SuiteReport};
use crate::services::entry::entry_check;
use crate::services::environ::{required_keys, EnvSnapshot};

pub fn pass(name: &str) -> CheckReport {
    CheckReport {
        name: name.to_string(),
        status: "ok".to_string(),
        expected: None,
        actual: None,
    }
}

/// The one failure mode a check has: the observed value did not match the
/// expected one.
pub fn mismatch(name: &str, expected: &str, actual: &str) -> CheckReport {
    CheckReport {
        name: name.to_string(),
        status: "failed".to_string(),
        expected: Some(expected.to_string()),
        actual: Some(actual.to_string()),
    }
}

fn harness_check() -> CheckReport {
    // If this one fails the check mechanism itself is broken.
    let observed = true;
    if observed {
        pass("harness")
    } else {
        mismatch("harness", "true", "false")
    }
}

fn env_check(key: &str, env: &EnvSnapshot) -> CheckReport {
    let name = format!("env:{}", key);
    if env.is_defined(key) {
        pass(&name)
    } else {
        mismatch(&name, "defined", "absent")
    }
}

/// The checks the config produces, in execution order, without running them.
pub fn plan_checks(cfg: &ConfigFile) -> Vec<CheckDescriptor> {
    let mut out = vec![CheckDescriptor {
        name: "harness".to_string(),
        kind: "harness".to_string(),
        subject: "check mechanism".to_string(),
    }];
    for key in required_keys(&cfg.env) {
        out.push(CheckDescriptor {
            name: format!("env:{}", key),
            kind: "env".to_string(),
            subject: key,
        });
    }
    out.push(CheckDescriptor {
        name: "entry".to_string(),
        kind: "entry".to_string(),
        subject: cfg
            .entry
            .as_ref()
            .map(|e| e.command.clone())
            .unwrap_or_else(|| "not configured".to_string()),
    });
    out
}

/// Run every check in declaration order. Checks are independent and share no
/// state; a failure never stops the rest of the suite.
pub fn run_suite(cfg: &ConfigFile, env: &EnvSnapshot) -> SuiteReport {
    let mut checks = vec![harness_check()];
    for key in required_keys(&cfg.env) {
        checks.push(env_check(&key, env));
    }
    checks.push(entry_check(cfg.entry.as_ref()));

    let failed = checks.iter().filter(|c| c.status != "ok").count();
    SuiteReport {
        suite: cfg.suite.name.clone(),
        overall: if failed == 0 { "ok" } else { "failed" }.to_string(),
        passed: checks.len() - failed,
        failed,
        checks,
    }
}
