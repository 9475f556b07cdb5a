use crate::domain::constants::{DEFAULT_MODE_VAR, DEFAULT_SUITE_NAME};
use serde::{Deserialize, Serialize};

fn default_suite_name() -> String {
    DEFAULT_SUITE_NAME.to_string()
}

fn default_mode_var() -> String {
    DEFAULT_MODE_VAR.to_string()
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub suite: SuiteSection,
    #[serde(default)]
    pub env: EnvSection,
    #[serde(default)]
    pub entry: Option<EntrySection>,
}

#[derive(Debug, Deserialize)]
pub struct SuiteSection {
    #[serde(default = "default_suite_name")]
    pub name: String,
}

impl Default for SuiteSection {
    fn default() -> Self {
        Self {
            name: default_suite_name(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EnvSection {
    /// Runtime-mode variable that must be defined before deeper tests run.
    #[serde(default = "default_mode_var")]
    pub mode_var: String,
    #[serde(default)]
    pub required: Vec<String>,
}

impl Default for EnvSection {
    fn default() -> Self {
        Self {
            mode_var: default_mode_var(),
            required: vec![],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EntrySection {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Serialize, Clone)]
pub struct CheckReport {
    pub name: String,
    pub status: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Serialize)]
pub struct SuiteReport {
    pub suite: String,
    pub overall: String,
    pub passed: usize,
    pub failed: usize,
    pub checks: Vec<CheckReport>,
}

#[derive(Serialize, Clone)]
pub struct CheckDescriptor {
    pub name: String,
    pub kind: String,
    pub subject: String,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
