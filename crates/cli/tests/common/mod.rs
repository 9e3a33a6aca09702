//! Shared test utilities for niord-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - `NIORD_ACCESS_TOKEN` is set to "test-token" unless overridden.

#![allow(dead_code)]

use assert_cmd::Command;

/// Returns a hermetic `niord-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Other `NIORD_*` env vars are cleared to ensure no leakage from the host.
pub fn niord_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("niord-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("NIORD_ACCESS_TOKEN", "test-token");

    cmd.env_remove("NIORD_BASE_URL")
        .env_remove("NIORD_AUTH_SERVER_URL")
        .env_remove("NIORD_DOMAIN")
        .env_remove("NIORD_LANGUAGES")
        .env_remove("NIORD_TIMEOUT")
        .env_remove("NIORD_MAX_RETRIES")
        .env_remove("NIORD_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `niord-cli` command pointed at `base_url`, without retries.
pub fn niord_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = niord_cmd();
    cmd.env("NIORD_BASE_URL", base_url);
    cmd.args(["--max-retries", "0"]);
    cmd
}
