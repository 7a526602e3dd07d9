mod common;
use common::*;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn list_reports_connection_failure_on_stdout_and_exits_zero() {
    cli()
        .args(["--project", "demo"])
        .assert()
        .success()
        .stdout(contains("error listing metric descriptors:"))
        .stdout(contains("transport error"));
}

#[test]
fn list_long_output_reports_the_same_failure() {
    cli()
        .args(["--project", "demo", "--short=false"])
        .assert()
        .success()
        .stdout(contains("error listing metric descriptors:"));
}

#[test]
fn project_falls_back_to_environment() {
    cli()
        .env("GOOGLE_CLOUD_PROJECT", "demo")
        .assert()
        .success()
        .stdout(contains("error listing metric descriptors:"))
        .stderr(contains("no project given").not());
}

#[test]
fn missing_project_is_warned_about_on_stderr() {
    cli()
        .assert()
        .success()
        .stderr(contains("no project given"));
}

#[test]
fn rejects_unknown_output_format() {
    cli()
        .args(["--project", "demo", "--output", "yaml"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn help_lists_flags() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--project"))
        .stdout(contains("--md"))
        .stdout(contains("--short"));
}

#[test]
fn single_dash_flags_select_list_mode() {
    cli()
        .args(["-project", "demo", "-short=false"])
        .assert()
        .success()
        .stdout(contains("error listing metric descriptors:"));
}

#[test]
fn invalid_timeout_is_warned_about() {
    cli()
        .env("GCM_REQUEST_TIMEOUT_MS", "30s")
        .args(["--project", "demo"])
        .assert()
        .success()
        .stderr(contains("ignoring invalid GCM_REQUEST_TIMEOUT_MS"))
        .stdout(contains("error listing metric descriptors:"));
}
