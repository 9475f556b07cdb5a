use crate::domain::models::EnvSection;
use std::collections::BTreeMap;

/// Read-only view of the process environment, captured once at suite setup.
///
/// Checks read from the snapshot instead of the ambient environment so a
/// single run observes one consistent state and tests can inject their own.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_vars(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn is_defined(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}

/// Keys the suite requires: the runtime-mode variable first, then the extra
/// required keys in declaration order, first occurrence winning.
pub fn required_keys(env: &EnvSection) -> Vec<String> {
    let mut out = vec![env.mode_var.clone()];
    for key in &env.required {
        if !out.contains(key) {
            out.push(key.clone());
        }
    }
    out
}
