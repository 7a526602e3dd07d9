use assert_cmd::prelude::*;
use std::process::Command;

// Nothing listens here, so every remote call fails at connect time without
// needing credentials or network access.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1";

pub fn cli() -> Command {
    let mut cmd = Command::cargo_bin("gcm-admin-cli").expect("binary exists");
    cmd.env("GCM_ENDPOINT", UNREACHABLE_ENDPOINT)
        .env("GCM_REQUEST_TIMEOUT_MS", "2000")
        .env_remove("GOOGLE_CLOUD_PROJECT")
        .env_remove("RUST_LOG");
    cmd
}
