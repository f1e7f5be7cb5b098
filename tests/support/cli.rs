//! Helpers for spawning the Shipdesk binary.

use std::process::{Command, Output};

/// Runs the Shipdesk binary with `args`, isolated from the developer's
/// `SHIPDESK_*` environment.
///
/// `env` entries with `None` are removed from the child environment.
///
/// # Panics
///
/// Panics if the binary cannot be executed.
pub fn run_shipdesk(args: &[&str], env: &[(&str, Option<&str>)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_shipdesk"));
    command.args(args);

    for key in [
        "SHIPDESK_API_URL",
        "SHIPDESK_DATABASE_URL",
        "SHIPDESK_MIGRATE_DB",
        "SHIPDESK_SHIPMENTS_FILE",
        "SHIPDESK_QUERY",
        "SHIPDESK_DATE_RANGE",
        "SHIPDESK_EMAIL",
        "SHIPDESK_PASSWORD",
        "SHIPDESK_LOGIN",
        "SHIPDESK_LOGOUT",
        "SHIPDESK_EXPORT",
        "SHIPDESK_OUTPUT",
        "SHIPDESK_TUI",
    ] {
        command.env_remove(key);
    }

    for (key, value) in env {
        match value {
            Some(env_value) => {
                command.env(key, env_value);
            }
            None => {
                command.env_remove(key);
            }
        }
    }

    command
        .output()
        .unwrap_or_else(|error| panic!("failed to execute binary: {error}"))
}
