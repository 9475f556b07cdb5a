//! Stable defaults shared between config loading and scaffolding.

pub const DEFAULT_SUITE_NAME: &str = "Project Setup - Smoke Test";
pub const DEFAULT_MODE_VAR: &str = "APP_ENV";
