//! Integration tests for the `marinax` CLI binary.
//!
//! These validate argument parsing, help output, shell completions, and
//! the signed-out/gated error paths -- all without a live API.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `marinax` binary with env isolation.
///
/// Clears all `MARINAX_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration
/// or token cache.
fn marinax_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("marinax");
    cmd.env("HOME", "/tmp/marinax-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/marinax-cli-test-nonexistent")
        .env("XDG_STATE_HOME", "/tmp/marinax-cli-test-nonexistent")
        .env_remove("MARINAX_PROFILE")
        .env_remove("MARINAX_API_URL")
        .env_remove("MARINAX_OUTPUT")
        .env_remove("MARINAX_INSECURE")
        .env_remove("MARINAX_TIMEOUT")
        .env_remove("MARINAX_PASSWORD");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = marinax_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    marinax_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Marine-Axis")
            .and(predicate::str::contains("providers"))
            .and(predicate::str::contains("jobs"))
            .and(predicate::str::contains("admins"))
            .and(predicate::str::contains("login")),
    );
}

#[test]
fn test_version_flag() {
    marinax_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("marinax"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    marinax_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    marinax_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    marinax_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = marinax_cmd().arg("harpoon").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("harpoon"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_jobs_list_without_config() {
    marinax_cmd()
        .args(["jobs", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_gated_command_while_signed_out() {
    // With an API URL but no cached session the gate fires before any
    // request is made: exit code 3 (auth) and a pointer at the right
    // login surface.
    let output = marinax_cmd()
        .args(["--api-url", "https://api.invalid", "jobs", "list"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("signed in") || text.contains("login"),
        "Expected sign-in hint:\n{text}"
    );
}

#[test]
fn test_whoami_while_signed_out() {
    let output = marinax_cmd()
        .args(["--api-url", "https://api.invalid", "whoami"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
}

#[test]
fn test_config_show_no_config() {
    // `config show` renders the default config when no file exists.
    marinax_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_invalid_output_format() {
    let output = marinax_cmd()
        .args(["--output", "invalid", "jobs", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly -- the failure should be about
    // the missing session, not about argument parsing.
    let output = marinax_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "--api-url",
            "https://api.invalid",
            "jobs",
            "list",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_jobs_subcommands_exist() {
    marinax_cmd().args(["jobs", "--help"]).assert().success().stdout(
        predicate::str::contains("list")
            .and(predicate::str::contains("show"))
            .and(predicate::str::contains("create"))
            .and(predicate::str::contains("approve"))
            .and(predicate::str::contains("reject")),
    );
}

#[test]
fn test_providers_subcommands_exist() {
    marinax_cmd()
        .args(["providers", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("approve"))
                .and(predicate::str::contains("reject"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_admins_subcommands_exist() {
    marinax_cmd()
        .args(["admins", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    marinax_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-password")),
        );
}

#[test]
fn test_login_kind_values() {
    marinax_cmd()
        .args(["login", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staff").and(predicate::str::contains("provider")));
}
