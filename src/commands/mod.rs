//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — init/validate/doctor: setup of the runner itself.
//! - `runtime.rs` — run/list: the smoke suite against the project.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate check logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::handle_admin_commands;
pub use runtime::handle_runtime_commands;
